use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ucrypt_algorithms::block::{Aes, BlockCipher};
use ucrypt_api::{Algorithm, CipherMode, SymmetricCipher};
use ucrypt_symmetric::{CipherConfig, CipherFactory};

fn bench_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-block");
    group.throughput(Throughput::Bytes(16));

    for key_len in [16usize, 24, 32] {
        let aes = Aes::new(&vec![0u8; key_len]).unwrap();
        group.bench_with_input(BenchmarkId::new("encrypt", aes.name()), &aes, |b, aes| {
            let mut block = [0u8; 16];
            b.iter(|| aes.encrypt_block(black_box(&mut block)));
        });
        group.bench_with_input(BenchmarkId::new("decrypt", aes.name()), &aes, |b, aes| {
            let mut block = [0u8; 16];
            b.iter(|| aes.decrypt_block(black_box(&mut block)));
        });
    }

    group.finish();
}

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-key-schedule");

    for key_len in [16usize, 24, 32] {
        let key = vec![0x2bu8; key_len];
        group.bench_with_input(BenchmarkId::from_parameter(key_len * 8), &key, |b, key| {
            b.iter(|| Aes::new(black_box(key)).unwrap());
        });
    }

    group.finish();
}

fn bench_engines(c: &mut Criterion) {
    let key = [0u8; 32];
    let iv = [0u8; 16];

    for mode in [CipherMode::Ecb, CipherMode::Cbc] {
        let mut group = c.benchmark_group(format!("AES-256-{}", mode));

        // Test different data sizes
        for size in [16usize, 1024, 16384, 1 << 20] {
            let data = vec![0u8; size];
            group.throughput(Throughput::Bytes(size as u64));

            let sequential =
                CipherFactory::create_with(Algorithm::Aes, mode, CipherConfig::sequential()).unwrap();
            let parallel = CipherFactory::create(Algorithm::Aes, mode).unwrap();
            let ciphertext = sequential.encrypt(&data, &key, Some(&iv), None).unwrap();

            group.bench_with_input(BenchmarkId::new("encrypt-sequential", size), &data, |b, data| {
                b.iter(|| sequential.encrypt(data, &key, Some(&iv), None).unwrap());
            });
            group.bench_with_input(BenchmarkId::new("decrypt-sequential", size), &ciphertext, |b, ct| {
                b.iter(|| sequential.decrypt(ct, &key, Some(&iv), None).unwrap());
            });
            group.bench_with_input(BenchmarkId::new("decrypt-parallel", size), &ciphertext, |b, ct| {
                b.iter(|| parallel.decrypt(ct, &key, Some(&iv), None).unwrap());
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_block, bench_key_schedule, bench_engines);
criterion_main!(benches);
