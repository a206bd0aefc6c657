// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use serde_json::Value;

use crate::common::{InvalidParamError, MissingParamError};
use crate::dtos::{HttpRequest, HttpResponse};
use crate::helpers::{bad_request, ok};
use crate::providers::EmailValidator;

use super::Controller;

// Checked in declaration order; the first violation wins.
const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

pub struct SignUpController<V> {
    email_validator: V,
}

impl<V> SignUpController<V> {
    pub fn new(email_validator: V) -> Self {
        Self { email_validator }
    }
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

impl<V: EmailValidator> Controller for SignUpController<V> {
    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        for field in REQUIRED_FIELDS {
            if is_missing(request.field(field)) {
                tracing::debug!(field, "sign-up rejected, required field missing");
                return bad_request(MissingParamError::new(field).into());
            }
        }

        // A present non-string email cannot be handed to the validator and
        // is reported the same way a malformed one is.
        match request.field("email").and_then(Value::as_str) {
            Some(email) if self.email_validator.is_valid(email) => ok(Value::Null),
            _ => {
                tracing::debug!("sign-up rejected, malformed email");
                bad_request(InvalidParamError::new("email").into())
            }
        }
    }
}
