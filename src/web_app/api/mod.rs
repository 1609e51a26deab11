// web_app/api/mod.rs - Server-side modules
//
// This module contains the remote catalog client and the environment
// configuration it is built from.

pub mod config;
pub mod catalog;
