// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

pub use signup_controller::*;

pub mod signup_controller;


use crate::dtos::{HttpRequest, HttpResponse};

/// One request value in, one response value out.
pub trait Controller {
    fn handle(&self, request: &HttpRequest) -> HttpResponse;
}
