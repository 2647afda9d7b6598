//! HTTP request handlers.
//!
//! Handlers take the raw body as `Bytes` and parse it leniently into a payload map, so
//! empty bodies, numbers sent as strings and other front-end quirks are reported through
//! the standard error envelope instead of axum's extractor rejections.

pub mod doctor;
pub mod owner;
pub mod pet;
pub mod service;
pub mod visit;

#[cfg(test)]
mod test;
