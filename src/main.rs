#![allow(non_snake_case)]

use salesboard::client;

fn main() {
    dioxus::launch(client::App);
}
