use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dotvault::core::entry_name;
use dotvault::{decrypt, parse_dotenv_key, resolve};
use rand::RngCore;
use std::collections::BTreeMap;
use std::time::Duration;

/// Generate a payload of given size.
fn generate_payload(size: usize) -> Vec<u8> {
    vec![b'x'; size]
}

/// Fresh 64-hex-char secret.
fn random_secret() -> String {
    let mut key = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut key);
    hex::encode(key)
}

/// Encrypt a payload into the base64 nonce/ciphertext/tag blob format.
fn encrypt_blob(plaintext: &[u8], secret: &str) -> String {
    let mut key = [0u8; 32];
    hex::decode_to_slice(secret, &mut key).unwrap();

    let mut nonce = [0u8; 12];
    rand::thread_rng().fill_bytes(&mut nonce);

    let cipher = Aes256Gcm::new_from_slice(&key).unwrap();
    let sealed = cipher.encrypt(Nonce::from_slice(&nonce), plaintext).unwrap();

    let mut blob = nonce.to_vec();
    blob.extend_from_slice(&sealed);
    STANDARD.encode(blob)
}

fn key_uri(secret: &str, environment: &str) -> String {
    format!("dotenv://:key_{secret}@dotenv.org/vault/.env.vault?environment={environment}")
}

/// Benchmark decryption with varying payload sizes.
fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrypt");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let sizes = [32, 256, 1024, 4096, 16384];

    for size in sizes {
        let secret = random_secret();
        let blob = encrypt_blob(&generate_payload(size), &secret);

        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("aes256gcm", format!("{}B", size)),
            &blob,
            |b, blob| {
                b.iter(|| {
                    let plaintext = decrypt(black_box(blob), black_box(&secret)).unwrap();
                    black_box(plaintext);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark rotation scaling: every candidate but the last is rejected.
fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let candidate_counts = [1, 2, 4, 8];
    let payload = generate_payload(256);

    for count in candidate_counts {
        let current = random_secret();
        let mut vault = BTreeMap::new();
        vault.insert(
            entry_name("production"),
            encrypt_blob(&payload, &current),
        );

        let mut keys: Vec<String> = (1..count)
            .map(|_| key_uri(&random_secret(), "production"))
            .collect();
        keys.push(key_uri(&current, "production"));
        let dotenv_key = keys.join(",");

        group.bench_with_input(
            BenchmarkId::new("resolve_256B", format!("{}_candidates", count)),
            &dotenv_key,
            |b, dotenv_key| {
                b.iter(|| {
                    let plaintext = resolve(black_box(dotenv_key), black_box(&vault)).unwrap();
                    black_box(plaintext);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark credential parsing alone.
fn bench_parse_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_key");
    group.sample_size(50);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let candidate_counts = [1, 2, 4, 8];

    for count in candidate_counts {
        let dotenv_key = (0..count)
            .map(|_| key_uri(&random_secret(), "production"))
            .collect::<Vec<_>>()
            .join(",");

        group.bench_with_input(
            BenchmarkId::new("uris", format!("{}_candidates", count)),
            &dotenv_key,
            |b, dotenv_key| {
                b.iter(|| {
                    let candidates = parse_dotenv_key(black_box(dotenv_key)).unwrap();
                    black_box(candidates);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_decrypt, bench_rotation, bench_parse_key);
criterion_main!(benches);
