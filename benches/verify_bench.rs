// ABOUTME: Criterion benchmarks for bridge token minting and verification
// ABOUTME: Measures the per-request cost of the admin edge gate hot path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Criterion benchmarks for the token codec.
//!
//! Verification runs on every admin domain request, so its cost bounds the
//! edge gate overhead. Minting runs once per handoff and matters less.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use harbor_admin_bridge::token::{mint_token, parse_token, verify_token_at, Claims};

const SECRET: &[u8] = b"bench-secret-0123456789abcdef0123456789abcdef";
const NOW: i64 = 1_700_000_000;

fn bench_mint(c: &mut Criterion) {
    let claims = Claims::with_lifetime("user-42", NOW, 300);

    let mut group = c.benchmark_group("mint_token");
    group.bench_function("hs256", |b| {
        b.iter(|| mint_token(black_box(&claims), black_box(SECRET)).unwrap());
    });
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let claims = Claims::with_lifetime("user-42", NOW, 300);
    let token = mint_token(&claims, SECRET).unwrap();
    let forged = {
        // Same shape, signed under a different secret
        mint_token(&claims, b"other-secret").unwrap()
    };

    let mut group = c.benchmark_group("verify_token");
    group.throughput(Throughput::Bytes(token.len() as u64));

    group.bench_function("valid", |b| {
        b.iter(|| verify_token_at(black_box(&token), black_box(SECRET), NOW + 100).unwrap());
    });

    group.bench_function("bad_signature", |b| {
        b.iter(|| verify_token_at(black_box(&forged), black_box(SECRET), NOW + 100).unwrap_err());
    });

    group.bench_function("malformed", |b| {
        b.iter(|| verify_token_at(black_box("not-a-token"), black_box(SECRET), NOW + 100).unwrap_err());
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let claims = Claims::with_lifetime("user-42", NOW, 300);
    let token = mint_token(&claims, SECRET).unwrap();

    let mut group = c.benchmark_group("parse_token");
    group.throughput(Throughput::Bytes(token.len() as u64));
    group.bench_function("three_segments", |b| {
        b.iter(|| parse_token(black_box(&token)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_mint, bench_verify, bench_parse);
criterion_main!(benches);
