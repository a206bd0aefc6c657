// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use actix_web::http::StatusCode;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: Value,
}

impl HttpResponse {
    pub fn new(status_code: StatusCode, body: Value) -> Self {
        Self { status_code, body }
    }
}
