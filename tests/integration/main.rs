//! Integration tests against a mock Text API server.

mod classify;
mod combined;
mod mock_server;
mod web;
