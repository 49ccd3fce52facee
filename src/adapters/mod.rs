//! Adapter implementations of the port traits.
//!
//! `live` adapters touch the real world (disk, subprocesses, HTTP).
//! `fake` adapters return scripted responses and record calls; they back
//! the unit tests so no check ever needs a real interpreter, git
//! repository, or Railway login.

pub mod fake;
pub mod live;
