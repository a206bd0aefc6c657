// Copyright (c) 2023 Afonso Barracha
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use regex::Regex;

use crate::common::regexes::email_regex;

/// Email syntax check the sign-up controller delegates to.
pub trait EmailValidator {
    fn is_valid(&self, email: &str) -> bool;
}

impl<V: EmailValidator + ?Sized> EmailValidator for &V {
    fn is_valid(&self, email: &str) -> bool {
        (**self).is_valid(email)
    }
}

#[derive(Clone, Debug)]
pub struct RegexEmailValidator {
    pattern: Regex,
}

impl RegexEmailValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: email_regex()?,
        })
    }
}

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, email: &str) -> bool {
        self.pattern.is_match(email)
    }
}
