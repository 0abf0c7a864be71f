//! Elixir Term Conversion Utilities
//!
//! Encodes scan results as Elixir terms.

use rustler::{Encoder, Env, NewBinary, Term};

use crate::buffer::HtmlBuffer;

// Pre-defined atoms for efficiency - created once at compile time
rustler::atoms! {
    ok,
    error,
}

/// Copy bytes into a new Elixir binary
pub fn bytes_to_binary<'a>(env: Env<'a>, bytes: &[u8]) -> Term<'a> {
    let mut binary = NewBinary::new(env, bytes.len());
    binary.as_mut_slice().copy_from_slice(bytes);
    binary.into()
}

/// `{:ok, binary}` for a value, `:error` otherwise
pub fn value_to_term<'a>(env: Env<'a>, value: Option<&[u8]>) -> Term<'a> {
    match value {
        Some(bytes) => (ok(), bytes_to_binary(env, bytes)).encode(env),
        None => error().encode(env),
    }
}

/// List of binaries, in order
pub fn values_to_term<'a>(env: Env<'a>, values: &[Vec<u8>]) -> Term<'a> {
    let mut list = Term::list_new_empty(env);
    for value in values.iter().rev() {
        list = list.list_prepend(bytes_to_binary(env, value));
    }
    list
}

/// List of `{:ok, binary} | :error`, in order
pub fn results_to_term<'a>(env: Env<'a>, results: &[Option<Vec<u8>>]) -> Term<'a> {
    let mut list = Term::list_new_empty(env);
    for result in results.iter().rev() {
        list = list.list_prepend(value_to_term(env, result.as_deref()));
    }
    list
}

/// Current tag name as a binary, `nil` when no tag is matched
pub fn current_tag_to_term<'a>(env: Env<'a>, buffer: &HtmlBuffer) -> Term<'a> {
    let tag = buffer.current_tag();
    if tag.is_zero() {
        rustler::types::atom::nil().encode(env)
    } else {
        bytes_to_binary(env, tag.name().as_bytes())
    }
}
