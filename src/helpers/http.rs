// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use actix_web::http::StatusCode;
use serde_json::Value;

use crate::common::ValidationError;
use crate::dtos::HttpResponse;

pub fn bad_request(error: ValidationError) -> HttpResponse {
    HttpResponse::new(StatusCode::BAD_REQUEST, error.to_body())
}

pub fn ok(body: Value) -> HttpResponse {
    HttpResponse::new(StatusCode::OK, body)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::common::MissingParamError;

    use super::*;

    #[test]
    fn bad_request_wraps_the_error_as_the_body() {
        let error = MissingParamError::new("passwordConfirmation");
        let response = bad_request(error.clone().into());

        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, error.to_body());
    }

    #[test]
    fn ok_keeps_the_given_body() {
        let response = ok(json!({ "id": 1 }));

        assert_eq!(response.status_code, StatusCode::OK);
        assert_eq!(response.body, json!({ "id": 1 }));
    }
}
