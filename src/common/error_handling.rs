// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use actix_web::{error, http::StatusCode, HttpResponse};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Missing Param : {param_name}")]
pub struct MissingParamError {
    pub param_name: String,
}

impl MissingParamError {
    pub fn new(param_name: &str) -> Self {
        Self {
            param_name: param_name.to_string(),
        }
    }

    pub fn to_body(&self) -> Value {
        json!({
            "name": "MissingParamError",
            "message": self.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Invalid Param : {param_name}")]
pub struct InvalidParamError {
    pub param_name: String,
}

impl InvalidParamError {
    pub fn new(param_name: &str) -> Self {
        Self {
            param_name: param_name.to_string(),
        }
    }

    pub fn to_body(&self) -> Value {
        json!({
            "name": "InvalidParamError",
            "message": self.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    MissingParam(#[from] MissingParamError),
    #[error(transparent)]
    InvalidParam(#[from] InvalidParamError),
}

impl ValidationError {
    pub fn to_body(&self) -> Value {
        match self {
            ValidationError::MissingParam(inner) => inner.to_body(),
            ValidationError::InvalidParam(inner) => inner.to_body(),
        }
    }
}

impl error::ResponseError for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(self.to_body())
    }
}

#[cfg(test)]
mod tests {
    use actix_web::error::ResponseError;

    use super::*;

    #[test]
    fn missing_param_error_formats_the_field_name() {
        let error = MissingParamError::new("name");
        assert_eq!(error.to_string(), "Missing Param : name");
        assert_eq!(
            error.to_body(),
            json!({
                "name": "MissingParamError",
                "message": "Missing Param : name",
            })
        );
    }

    #[test]
    fn invalid_param_error_formats_the_field_name() {
        let error = InvalidParamError::new("email");
        assert_eq!(error.to_string(), "Invalid Param : email");
        assert_eq!(
            error.to_body(),
            json!({
                "name": "InvalidParamError",
                "message": "Invalid Param : email",
            })
        );
    }

    #[test]
    fn validation_error_responds_with_bad_request() {
        let error = ValidationError::from(MissingParamError::new("password"));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_error_keeps_the_inner_body() {
        let inner = InvalidParamError::new("email");
        let error = ValidationError::from(inner.clone());
        assert_eq!(error.to_body(), inner.to_body());
        assert_eq!(error.to_string(), inner.to_string());
    }
}
