// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use regex::Regex;

pub fn email_regex() -> Result<Regex, regex::Error> {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$")
}
