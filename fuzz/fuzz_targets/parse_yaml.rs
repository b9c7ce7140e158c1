// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 Vulnpix Contributors

#![no_main]

use libfuzzer_sys::fuzz_target;
use vulnpix_core::PayloadFormat;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = vulnpix_core::parse_structured_payload(s, PayloadFormat::Yaml);
    }
});
