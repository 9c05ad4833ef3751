#[cfg( test )]
mod tests {
    use argx::*;

    use std::time::Duration;

    #[derive( Clone, Debug, PartialEq, NamedArgs )]
    struct Raise {
        wage:  f64,
        id:    i32,
        admin: bool,
    }

    impl Raise {
        // The terminal operation: pure, reads the accumulated fields.
        fn apply( &self, base: f64 ) -> f64 {
            if self.admin {
                base
            } else {
                base + self.wage * self.id as f64
            }
        }
    }

    #[test]
    fn setter_leaves_receiver_unchanged() {
        let a = Raise::new().with_id( 3 );
        let b = a.with_wage( 7.5 );
        assert_eq!( a, Raise::new().with_id( 3 ));
        assert_eq!( b.wage, 7.5 );
        assert_eq!( b.id, a.id );
        assert_eq!( b.admin, a.admin );
    }

    #[test]
    fn setters_commute_over_distinct_fields() {
        let x = Raise::new().with_wage( 1.0 ).with_id( 2 );
        let y = Raise::new().with_id( 2 ).with_wage( 1.0 );
        assert_eq!( x, y );
    }

    #[test]
    fn unset_arguments_hold_their_defaults() {
        let implicit = Raise::new();
        let explicit = Raise::new().with_wage( 0.0 ).with_id( 0 ).with_admin( false );
        assert_eq!( implicit, explicit );
        assert_eq!( implicit.apply( 100.0 ), explicit.apply( 100.0 ));
        assert_eq!( Raise::default(), Raise::new() );
    }

    #[test]
    fn partial_application_reuse() {
        let p1 = Raise::new().with_id( 6 );
        let p2 = p1.with_admin( false );
        let p3 = p1.with_admin( true );
        assert_eq!( p1.id, 6 );
        assert_eq!( p2.id, 6 );
        assert_eq!( p3.id, 6 );
        assert_ne!( p2.admin, p3.admin );
    }

    #[test]
    fn terminal_reinvocation_is_consistent() {
        let raise = Raise::new().with_wage( 2.0 ).with_id( 3 );
        let first = raise.apply( 10.0 );
        let second = raise.apply( 10.0 );
        assert_eq!( first, second );
        assert_eq!( raise, Raise::new().with_wage( 2.0 ).with_id( 3 ));
    }

    #[test]
    fn factory_on_the_owning_entity() {
        struct Payroll;

        impl Payroll {
            fn raise( &self ) -> Raise {
                Raise::new()
            }
        }

        let payroll = Payroll;
        let raise = payroll.raise().with_id( 1 ).with_wage( 0.5 );
        assert_eq!( raise.apply( 1.0 ), 1.5 );
    }

    #[test]
    fn explicit_defaults() {
        #[derive( Clone, Debug, PartialEq, NamedArgs )]
        struct Retry {
            #[arg( default = 3 )]
            attempts: u32,
            #[arg( default = Duration::from_millis( 100 ))]
            backoff:  Duration,
            jitter:   bool,
        }

        let retry = Retry::new();
        assert_eq!( retry.attempts, 3 );
        assert_eq!( retry.backoff, Duration::from_millis( 100 ));
        assert!( !retry.jitter );
        assert_eq!( Retry::default(), Retry::new() );

        let eager = Retry::new().with_attempts( 1 ).with_jitter( true );
        assert_eq!( eager.attempts, 1 );
        assert_eq!( eager.backoff, Duration::from_millis( 100 ));
    }

    #[test]
    fn skipped_field_takes_a_hand_written_setter() {
        #[derive( Clone, Debug, PartialEq, NamedArgs )]
        struct Volume {
            #[arg( skip )]
            gain:  f32,
            muted: bool,
        }

        impl Volume {
            fn with_gain( &self, value: f32 ) -> Result<Self, String> {
                if !( 0.0..=1.0 ).contains( &value ) {
                    return Err( format!( "gain {} out of range", value ));
                }
                let mut next = self.clone();
                next.gain = value;
                Ok( next )
            }
        }

        let volume = Volume::new().with_muted( true ).with_gain( 0.5 ).unwrap();
        assert_eq!( volume.gain, 0.5 );
        assert!( volume.muted );
        assert!( Volume::new().with_gain( 1.5 ).is_err() );
    }

    #[test]
    fn generic_accumulator() {
        #[derive( Clone, Debug, PartialEq, NamedArgs )]
        struct Tagged<T> {
            value: T,
            label: &'static str,
        }

        let tagged = Tagged::<i32>::new().with_value( 5 ).with_label( "five" );
        assert_eq!( tagged, Tagged { value: 5, label: "five" });
        assert_eq!( Tagged::<i32>::default().value, 0 );
    }

    #[test]
    fn shared_parameter_set_behind_a_trait() {
        #[derive( Clone, Debug, PartialEq, NamedArgs )]
        struct Pricing {
            #[arg( default = 1.0 )]
            rate:      f64,
            surcharge: f64,
        }

        struct Standard( Pricing );
        struct Premium( Pricing );

        impl Invoke<( f64, )> for Standard {
            type Output = f64;

            fn invoke( &self, ( amount, ): ( f64, )) -> f64 {
                amount * self.0.rate + self.0.surcharge
            }
        }

        impl Invoke<( f64, )> for Premium {
            type Output = f64;

            fn invoke( &self, ( amount, ): ( f64, )) -> f64 {
                amount * self.0.rate * 2.0 + self.0.surcharge
            }
        }

        let shared = Pricing::new().with_surcharge( 5.0 );
        let cases: Vec<Box<dyn Invoke<( f64, ), Output = f64>>> = vec![
            Box::new( Standard( shared.clone() )),
            Box::new( Premium( shared )),
        ];
        let results: Vec<f64> = cases.iter().map( |case| case.invoke(( 10.0, ))).collect();
        assert_eq!( results, vec![ 15.0, 25.0 ]);
    }
}
