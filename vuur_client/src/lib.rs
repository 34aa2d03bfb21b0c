//! Client side of the contact pipeline: a typed REST client for
//! `POST /api/contact` and the form state machine driving it.

pub mod api;
pub mod form;
