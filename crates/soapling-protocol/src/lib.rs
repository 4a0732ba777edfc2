//! SOAP 1.1 envelope codec for RPC-style calls.
//!
//! The `cores` module provides the typed tag layer (`Tag<V, N>` with
//! compile-time tag names), `soap` the envelope/body/fault structures, and
//! `rpc` the request payload and parsed response for `method(params...)`
//! calls in the soaplib wire convention.

pub mod cores;
pub mod rpc;
pub mod soap;

mod macros;
