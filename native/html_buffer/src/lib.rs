//! html_buffer - Forward-only tag seeking over raw markup
//!
//! A cursor walks a resident byte buffer to tags by name or by `id`/`class`
//! identifier and reads the bytes between a tag and its closing sequence.
//! No DOM, no token stream.
//!
//! Surfaces:
//! - Cursor: new / seek / mark boundary / read (HtmlBuffer resource)
//! - One-shot: extract
//! - Batch: collect_values, extract_parallel (forked cursors)

use rustler::{Atom, Binary, Encoder, Env, ResourceArc, Term};

mod allocator;
pub mod buffer;
pub mod core;
mod resource;
pub mod strategy;
mod term;

pub use crate::buffer::HtmlBuffer;
pub use crate::core::tag::Tag;

use resource::{HtmlBufferRef, HtmlBufferResource};
use term::{current_tag_to_term, results_to_term, value_to_term, values_to_term};

// ============================================================================
// Memory Tracking NIFs
// ============================================================================

#[rustler::nif]
fn get_rust_memory() -> usize {
    allocator::tracking::current()
}

#[rustler::nif]
fn get_rust_memory_peak() -> usize {
    allocator::tracking::peak()
}

#[rustler::nif]
fn reset_rust_memory_stats() -> (usize, usize) {
    allocator::tracking::reset()
}

// ============================================================================
// Cursor NIFs
// ============================================================================

/// Create a scanner over a copy of the input (returns ResourceArc)
#[rustler::nif]
fn new(input: Binary) -> HtmlBufferRef {
    ResourceArc::new(HtmlBufferResource::new(input.as_slice().to_vec()))
}

/// Independent cursor over the same bytes, starting where `buffer` stands
#[rustler::nif]
fn fork(buffer: HtmlBufferRef) -> Option<HtmlBufferRef> {
    buffer
        .with_buffer(HtmlBuffer::fork)
        .ok()
        .map(|fork| ResourceArc::new(HtmlBufferResource::from_buffer(fork)))
}

/// Seek to the next tag named `name`
#[rustler::nif]
fn seek_to_tag(buffer: HtmlBufferRef, name: &str) -> bool {
    buffer
        .with_buffer_mut(|b| b.seek_to_tag(name))
        .unwrap_or(false)
}

/// Seek to the next tag named `name` carrying `identifier` as id or class
#[rustler::nif]
fn seek_to_identified_tag(buffer: HtmlBufferRef, name: &str, identifier: &str) -> bool {
    buffer
        .with_buffer_mut(|b| b.seek_to_identified_tag(name, identifier))
        .unwrap_or(false)
}

/// Bound later seeks by the current tag's closing tag
#[rustler::nif]
fn mark_closing_tag(buffer: HtmlBufferRef) -> Atom {
    match buffer.with_buffer_mut(HtmlBuffer::mark_closing_tag) {
        Ok(()) => term::ok(),
        Err(_) => term::error(),
    }
}

#[rustler::nif]
fn clear_closing_tag(buffer: HtmlBufferRef) -> Atom {
    match buffer.with_buffer_mut(HtmlBuffer::clear_closing_tag) {
        Ok(()) => term::ok(),
        Err(_) => term::error(),
    }
}

/// Read the current tag's value: `{:ok, binary}` or `:error`
#[rustler::nif]
fn read_tag_value<'a>(env: Env<'a>, buffer: HtmlBufferRef) -> Term<'a> {
    buffer
        .with_buffer(|b| value_to_term(env, b.read_tag_value()))
        .unwrap_or_else(|_| value_to_term(env, None))
}

#[rustler::nif]
fn position(buffer: HtmlBufferRef) -> usize {
    buffer.with_buffer(HtmlBuffer::position).unwrap_or(0)
}

/// Name of the current tag, or nil
#[rustler::nif]
fn current_tag<'a>(env: Env<'a>, buffer: HtmlBufferRef) -> Term<'a> {
    buffer
        .with_buffer(|b| current_tag_to_term(env, b))
        .unwrap_or_else(|_| rustler::types::atom::nil().encode(env))
}

// ============================================================================
// Extraction NIFs
// ============================================================================

/// Seek and read in one call, without keeping a resource
#[rustler::nif]
fn extract<'a>(env: Env<'a>, input: Binary<'a>, name: &str, identifier: &str) -> Term<'a> {
    let value = strategy::extract(input.as_slice(), name, identifier);
    value_to_term(env, value.as_deref())
}

/// Values of every following match; advances the cursor
#[rustler::nif]
fn collect_values<'a>(env: Env<'a>, buffer: HtmlBufferRef, name: &str, identifier: &str) -> Term<'a> {
    let values = buffer
        .with_buffer_mut(|b| strategy::collect_values(b, name, identifier))
        .unwrap_or_default();
    values_to_term(env, &values)
}

/// Run `{name, identifier}` queries in parallel on forks of the cursor
#[rustler::nif(schedule = "DirtyCpu")]
fn extract_parallel<'a>(env: Env<'a>, buffer: HtmlBufferRef, queries: Vec<(&str, &str)>) -> Term<'a> {
    // Fork under the lock, scan outside it
    let results = buffer
        .with_buffer(HtmlBuffer::fork)
        .map(|fork| strategy::extract_parallel(&fork, &queries))
        .unwrap_or_else(|_| vec![None; queries.len()]);
    results_to_term(env, &results)
}

// ============================================================================
// NIF Initialization
// ============================================================================

rustler::init!("Elixir.HtmlBuffer.Native");
