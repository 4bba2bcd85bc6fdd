use cryptocore::hash::sha256;
use cryptocore::{curve25519, ed448, ed25519, p256, secp256k1};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_ecdsa(c: &mut Criterion) {
    let key = [0x17u8; 32];
    let hash = sha256(b"benchmark message");

    let public = secp256k1::private_key_to_public_key(&key, true).unwrap();
    let sig = secp256k1::sign(&key, &hash).unwrap();

    c.bench_function("secp256k1 sign", |b| {
        b.iter(|| secp256k1::sign(black_box(&key), black_box(&hash)))
    });
    c.bench_function("secp256k1 verify", |b| {
        b.iter(|| secp256k1::verify(black_box(&public), black_box(&hash), black_box(&sig.to_bytes())))
    });
    c.bench_function("secp256k1 recover", |b| {
        b.iter(|| secp256k1::recover_public_key(black_box(&hash), black_box(&sig.to_bytes()), sig.recovery_id()))
    });
    c.bench_function("p256 sign", |b| {
        b.iter(|| p256::sign(black_box(&key), black_box(&hash)))
    });
}

pub fn bench_eddsa(c: &mut Criterion) {
    let seed = [0x29u8; 32];
    let public = ed25519::private_key_to_public_key(&seed, true).unwrap();
    let sig = ed25519::sign(&seed, b"benchmark message").unwrap();

    c.bench_function("ed25519 sign", |b| {
        b.iter(|| ed25519::sign(black_box(&seed), black_box(b"benchmark message")))
    });
    c.bench_function("ed25519 verify", |b| {
        b.iter(|| ed25519::verify(black_box(&public), black_box(b"benchmark message"), black_box(&sig)))
    });

    let seed = [0x29u8; 57];
    c.bench_function("ed448 sign", |b| {
        b.iter(|| ed448::sign(black_box(&seed), black_box(b"benchmark message")))
    });
}

pub fn bench_x25519(c: &mut Criterion) {
    let alice = [0x31u8; 32];
    let bob = curve25519::public_u(&[0x47u8; 32]).unwrap();

    c.bench_function("x25519 shared secret", |b| {
        b.iter(|| curve25519::diffie_hellman(black_box(&alice), black_box(&bob)))
    });
}

criterion_group!(benches, bench_ecdsa, bench_eddsa, bench_x25519);
criterion_main!(benches);
