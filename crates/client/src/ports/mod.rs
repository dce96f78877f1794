//! Port definitions for the client.
//!
//! Only outbound ports exist here: the shell consumes the host's
//! viewport, history, and document; it drives no inbound protocol.

pub mod outbound;
