// SPDX-License-Identifier: Apache-2.0

//! Benchmark for the input sanitization boundary.
//!
//! The boundary runs on every request, so validation and payload
//! parsing should stay well under a millisecond.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vulnpix_core::{PayloadFormat, parse_structured_payload, validate_domain};

/// A maximum-length domain: three 63-byte labels and a 61-byte tail.
fn generate_long_domain() -> String {
    let label = "a".repeat(63);
    format!("{label}.{label}.{label}.{}", "a".repeat(61))
}

/// An XML payload with surrounding elements the scan has to skip.
fn generate_xml_payload() -> String {
    let mut payload = String::from("<search>");
    for i in 0..50 {
        payload.push_str("<filter>value-");
        payload.push_str(&i.to_string());
        payload.push_str("</filter>");
    }
    payload.push_str("<query>kittens &amp; puppies</query></search>");
    payload
}

fn bench_validate_domain(c: &mut Criterion) {
    let long = generate_long_domain();

    c.bench_function("validate_domain_short", |b| {
        b.iter(|| validate_domain(black_box("sub-domain.example.com")));
    });
    c.bench_function("validate_domain_max_length", |b| {
        b.iter(|| validate_domain(black_box(&long)));
    });
    c.bench_function("validate_domain_reject_injection", |b| {
        b.iter(|| validate_domain(black_box("8.8.8.8; rm -rf /")));
    });
}

fn bench_parse_payload(c: &mut Criterion) {
    let xml = generate_xml_payload();
    let yaml = "query: kittens\nextra: ignored\n";

    c.bench_function("parse_xml_payload", |b| {
        b.iter(|| parse_structured_payload(black_box(&xml), PayloadFormat::Xml));
    });
    c.bench_function("parse_yaml_payload", |b| {
        b.iter(|| parse_structured_payload(black_box(yaml), PayloadFormat::Yaml));
    });
}

criterion_group!(benches, bench_validate_domain, bench_parse_payload);
criterion_main!(benches);
