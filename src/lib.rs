// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to run the interactive screens.
//
// Module responsibilities:
// - `router`: the two routes (`/` and `/toc`) and the current one.
// - `upload`: the upload screen; declared media type check, drag state,
//   parsing of files dropped onto the terminal.
// - `contents`: the fixed table of contents and its rendering.
// - `app`: ties the router and screens together behind one event type.
// - `config`: environment configuration.
// - `style`: terminal colours.
// - `ui`: the `dialoguer` loop that turns terminal input into events.
pub mod app;
pub mod config;
pub mod contents;
pub mod router;
pub mod style;
pub mod ui;
pub mod upload;
