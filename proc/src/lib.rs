extern crate proc_macro;

mod attrs;
mod ordinal;
mod record;

use proc_macro::TokenStream;

/// Proc-macro to derive `Record` and `Element` traits for user-defined structure.
///
/// This macro requires that type is a non-generic `struct` with named fields.
/// All fields must implement `Element` unless skipped.
///
/// Field attributes:
///
/// * `#[flatline(order = N)]` places the field before fields without explicit order.
/// * `#[flatline(skip)]` excludes the field from the line.
///   Skipped field must implement `Default`.
#[proc_macro_derive(Record, attributes(flatline))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match record::derive(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Proc-macro to derive `Ordinal` and `Element` traits for user-defined enum.
///
/// This macro requires that type is a non-generic `enum`
/// with at least one variant and no variant fields.
#[proc_macro_derive(Ordinal)]
pub fn derive_ordinal(input: TokenStream) -> TokenStream {
    match ordinal::derive(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
