//! Generated bindings for the BeerLikes service contract.
//!
//! The contract itself is owned outside this component (see
//! `proto_files/beer_likes.proto`); server bindings are generated too so the
//! integration tests can stand up an in-process fixture service.

#[allow(clippy::all, missing_debug_implementations)]
pub mod beerlikes {
    include!(concat!(env!("OUT_DIR"), "/beerlikes.rs"));
}
