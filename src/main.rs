#![allow(warnings)]
//! Savings Admin Console Entry Point

mod api;
mod app;
mod components;
mod context;
mod detail;
mod export;
mod forms;
mod list;
mod models;
mod notify;
mod pages;
mod session;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
