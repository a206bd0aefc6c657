// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HttpRequest {
    pub body: Map<String, Value>,
}

impl HttpRequest {
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    // Non-object bodies become an empty mapping.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(map) => Self { body: map },
            _ => Self { body: Map::new() },
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }
}
