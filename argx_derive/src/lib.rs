extern crate proc_macro;
use proc_macro::TokenStream;

use proc_macro2::Span;

use quote::{format_ident, quote};

use syn::spanned::Spanned;
use syn::{
    parse_macro_input, parse_quote, Data, DataStruct, DeriveInput, Error, Expr, Field, Fields,
    FieldsNamed, Ident, Type,
};

const MUST_USE_MSG: &str = "a chained setter returns a new accumulator; \
     chain it further or hand it to the terminal operation";

/// One named argument slot of the accumulator, as declared by a struct field.
struct ArgField {
    ident: Ident,
    ty: Type,
    default: Option<Expr>,
    skip: bool,
}

impl ArgField {
    fn parse(field: &Field) -> syn::Result<Self> {
        let ident = match &field.ident {
            Some(ident) => ident.clone(),
            None => return Err(Error::new(field.span(), "accumulator fields must be named")),
        };
        let mut default = None;
        let mut skip = false;
        for attr in &field.attrs {
            if !attr.path().is_ident("arg") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    default = Some(meta.value()?.parse::<Expr>()?);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `default = <expr>` or `skip`"))
                }
            })?;
        }
        Ok(ArgField {
            ident,
            ty: field.ty.clone(),
            default,
            skip,
        })
    }

    fn default_expr(&self) -> proc_macro2::TokenStream {
        match &self.default {
            Some(expr) => quote!( #expr ),
            None => quote!( ::core::default::Default::default() ),
        }
    }
}

fn named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => Ok(named),
        Data::Struct(data) => Err(Error::new(
            data.fields.span(),
            "NamedArgs accumulators are structs with named fields",
        )),
        _ => Err(Error::new(
            Span::call_site(),
            "NamedArgs can only be derived for structs",
        )),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let args = named_fields(input)?
        .named
        .iter()
        .map(ArgField::parse)
        .collect::<syn::Result<Vec<_>>>()?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let field_idents = args.iter().map(|arg| &arg.ident).collect::<Vec<_>>();
    let defaults = args.iter().map(ArgField::default_expr).collect::<Vec<_>>();

    // Fields without an explicit `#[arg(default = ..)]` fall back to the
    // type's `Default`, so `new` and the `Default` impl need those bounds.
    let implied = args
        .iter()
        .filter(|arg| arg.default.is_none())
        .map(|arg| &arg.ty)
        .collect::<Vec<_>>();
    let new_where = if implied.is_empty() {
        quote!()
    } else {
        quote!( where #( #implied: ::core::default::Default ),* )
    };

    let setters = args.iter().filter(|arg| !arg.skip).map(|arg| {
        let field = &arg.ident;
        let ty = &arg.ty;
        let setter = format_ident!("with_{}", field);
        let doc = format!(
            "Returns a new accumulator equal to this one except that `{}` holds `value`.",
            field,
        );
        quote! {
            #[doc = #doc]
            #[must_use = #MUST_USE_MSG]
            pub fn #setter(&self, value: #ty) -> Self
            where
                Self: ::core::clone::Clone,
            {
                let mut next = ::core::clone::Clone::clone(self);
                next.#field = value;
                next
            }
        }
    });

    let mut default_generics = input.generics.clone();
    for ty in &implied {
        default_generics
            .make_where_clause()
            .predicates
            .push(parse_quote!( #ty: ::core::default::Default ));
    }
    let (default_impl_generics, _, default_where_clause) = default_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            /// Returns an accumulator with every named argument at its default.
            pub fn new() -> Self #new_where {
                Self {
                    #( #field_idents: #defaults ),*
                }
            }

            #( #setters )*
        }

        impl #default_impl_generics ::core::default::Default for #ident #ty_generics
        #default_where_clause
        {
            fn default() -> Self {
                Self::new()
            }
        }
    })
}

/// Declares the chained named-argument surface of an accumulator struct.
///
/// For a struct with named fields, generates `new` (all arguments at their
/// defaults, also exposed as `Default`) and one `#[must_use]` chaining setter
/// `with_<field>` per field. Setters take `&self` and return an independent
/// copy with that one field replaced; the receiver is never mutated.
///
/// Field attributes:
///
/// - `#[arg(default = <expr>)]` overrides the `Default::default()` fallback.
/// - `#[arg(skip)]` suppresses the generated setter, leaving room for a
///   hand-written one (for example a validating setter returning `Result`).
///
/// # Misuse
///
/// Anything but a struct with named fields is rejected at build time:
///
/// ```rust,compile_fail
/// use argx_derive::NamedArgs;
///
/// #[derive( NamedArgs )]
/// enum Switch { On, Off }
/// ```
///
/// ```rust,compile_fail
/// use argx_derive::NamedArgs;
///
/// #[derive( NamedArgs )]
/// struct Pair( i32, i32 );
/// ```
///
/// and so is an `#[arg]` attribute carrying anything other than
/// `default = <expr>` or `skip`:
///
/// ```rust,compile_fail
/// use argx_derive::NamedArgs;
///
/// #[derive( Clone, NamedArgs )]
/// struct Raise {
///     #[arg( required )]
///     id: i32,
/// }
/// ```
#[proc_macro_derive(NamedArgs, attributes(arg))]
pub fn named_args(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
