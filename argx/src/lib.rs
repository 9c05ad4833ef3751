//! # Overview
//!
//! This project provides simulation of named, optional and partially applied
//! arguments in Rust, using the derive macro `#[derive(NamedArgs)]` and the
//! [`Invoke`] trait.
//!
//! A parameter set is declared as a plain struct. The derive turns it into an
//! *argument accumulator*: a value that collects arguments one at a time
//! through chained, side-effect-free setter calls, until a terminal operation
//! reads the accumulated fields and runs the real logic.
//!
//! ## Usage of this crate
//!
//! Add the following in your Cargo.toml file:
//!
//! ```toml
//! [dependencies]
//! argx = "0.1"
//! ```
//!
//! Add the following in your .rs files:
//!
//! ```rust,no_run
//! use argx::*;
//! ```
//!
//! # Declaring an accumulator
//!
//! Each named field is one named argument. Unset arguments hold their
//! defaults, either the type's `Default` or an explicit
//! `#[arg(default = ..)]`.
//!
//! ```rust
//! use argx::NamedArgs;
//!
//! #[derive( Clone, Debug, PartialEq, NamedArgs )]
//! struct Raise {
//!     wage:  f64,
//!     id:    i32,
//!     admin: bool,
//! }
//!
//! let raise = Raise::new().with_id( 6 ).with_wage( 3.5 );
//! assert_eq!( raise, Raise { wage: 3.5, id: 6, admin: false });
//! ```
//!
//! Setters take `&self` and return an independent copy, so an intermediate
//! accumulator stays usable after further chains are derived from it:
//!
//! ```rust
//! # use argx::NamedArgs;
//! # #[derive( Clone, Debug, PartialEq, NamedArgs )]
//! # struct Raise { wage: f64, id: i32, admin: bool }
//! let shared = Raise::new().with_id( 6 );
//! let a = shared.with_admin( true );
//! let b = shared.with_admin( false );
//! assert_eq!( shared.id, 6 );
//! assert_ne!( a, b );
//! ```
//!
//! # Chained setters are must-use
//!
//! Discarding a setter's result silently drops the accumulated arguments, so
//! every generated setter is `#[must_use]`. Escalate the diagnostic to a
//! build failure with `deny(unused_must_use)`; this sample then fails to
//! compile:
//!
//! ```rust,compile_fail
//! #![deny(unused_must_use)]
//! use argx::NamedArgs;
//!
//! #[derive( Clone, NamedArgs )]
//! struct Raise { wage: f64, id: i32, admin: bool }
//!
//! let raise = Raise::new();
//! raise.with_id( 6 );
//! ```
//!
//! while a chain ending in a binding or a terminal call builds cleanly:
//!
//! ```rust
//! #![deny(unused_must_use)]
//! use argx::NamedArgs;
//!
//! #[derive( Clone, NamedArgs )]
//! struct Raise { wage: f64, id: i32, admin: bool }
//!
//! let raise = Raise::new().with_id( 6 ).with_admin( true );
//! assert!( raise.admin );
//! ```
//!
//! # Terminal operations
//!
//! The terminal operation is ordinary user code: an inherent method reading
//! the accumulated fields, taking whatever required (unnamed) arguments the
//! use case has. When several specialized use cases accept the same
//! parameter set, implement [`Invoke`] once per use case instead:
//!
//! ```rust
//! use argx::{ Invoke, NamedArgs };
//!
//! #[derive( Clone, NamedArgs )]
//! struct Greeting {
//!     #[arg( default = String::from( "hello" ))]
//!     salutation: String,
//!     shout:      bool,
//! }
//!
//! impl<'a> Invoke<( &'a str, )> for Greeting {
//!     type Output = String;
//!
//!     fn invoke( &self, ( name, ): ( &'a str, )) -> String {
//!         let line = format!( "{} {}", self.salutation, name );
//!         if self.shout { line.to_uppercase() } else { line }
//!     }
//! }
//!
//! let plain = Greeting::new();
//! assert_eq!( plain.invoke(( "world", )), "hello world" );
//! assert_eq!( plain.with_shout( true ).invoke(( "world", )), "HELLO WORLD" );
//! ```
//!
//! `invoke` takes `&self`, so the same accumulator may be invoked any number
//! of times; its fields never change between calls.
//!
//! # Notes
//!
//! The derive generates `new` and a `Default` impl, so the accumulator struct
//! must not define either itself. Setters require `Self: Clone`.
//!
//! # License
//!
//! Under Apache License 2.0 or MIT License, at your will.

pub use argx_derive::NamedArgs;

/// A terminal operation over a shared parameter set.
///
/// `Req` carries the statically required (unnamed) arguments as a tuple;
/// the accumulated named arguments are read from `self`. Implement it once
/// per specialized use case that accepts the same parameter set.
pub trait Invoke<Req> {
    /// What the terminal operation produces.
    type Output;

    /// Runs the real logic with the accumulated named arguments and the
    /// required ones.
    fn invoke(&self, required: Req) -> Self::Output;
}
