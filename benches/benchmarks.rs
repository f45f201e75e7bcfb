use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use num_bigint::BigUint;

use kmac448::ed448::Point;
use kmac448::keccak::KeccakF1600;
use kmac448::xof::{cshake256, kmac_xof256, shake256};
use kmac448::{ecies, pw};

const INPUT: usize = 16 * 1024;

fn xof_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("xof");
    g.throughput(Throughput::Bytes(INPUT as u64));
    g.bench_with_input("SHAKE256", &[0u8; INPUT], |b, block| {
        b.iter(|| shake256(block, 512))
    });
    g.bench_with_input("cSHAKE256", &[0u8; INPUT], |b, block| {
        b.iter(|| cshake256(block, 512, b"", b"Email Signature"))
    });
    g.bench_with_input("KMACXOF256", &[0u8; INPUT], |b, block| {
        b.iter(|| kmac_xof256(b"key", block, 512, b"T"))
    });
    g.finish();
}

fn ae_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("ae");
    g.throughput(Throughput::Bytes(INPUT as u64));
    g.bench_with_input("encrypt", &[0u8; INPUT], |b, block| {
        b.iter(|| pw::encrypt(block, b"password"))
    });
    g.bench_with_input("decrypt", &pw::encrypt(&[0u8; INPUT], b"password"), |b, c| {
        b.iter(|| pw::decrypt(c, b"password"))
    });
    g.finish();
}

fn curve_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("curve");
    g.sample_size(10);
    let scalar = BigUint::parse_bytes(b"deadbeef", 16).unwrap() << 420;
    g.bench_function("scalar_mul", |b| {
        let p = Point::generator();
        b.iter(|| p.scalar_mul(&scalar))
    });
    let kp = ecies::KeyPair::from_passphrase(b"bench");
    g.bench_with_input("ec_encrypt", &[0u8; 1024], |b, block| {
        b.iter(|| ecies::encrypt(kp.public(), block))
    });
    g.bench_with_input("ec_decrypt", &ecies::encrypt(kp.public(), &[0u8; 1024]), |b, c| {
        b.iter(|| ecies::decrypt(c, b"bench"))
    });
    g.finish();
}

fn permutation_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("permutation");
    g.sample_size(1_000);
    g.throughput(Throughput::Bytes(200));
    g.bench_function("Keccak-f1600", |b| {
        let mut state = KeccakF1600::default();
        b.iter(|| state.permute())
    });
    g.finish();
}

criterion_group!(
    benches,
    xof_benchmarks,
    ae_benchmarks,
    curve_benchmarks,
    permutation_benchmarks
);
criterion_main!(benches);
