use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use factura_ec::clave::{ClaveAcceso, ClaveBuilder};
use factura_ec::core::{Ambiente, DocumentoTipo, modulo10, modulo11};
use factura_ec::identificacion::{validate_cedula, validate_ruc};
use factura_ec::secuencia::{format_numero, parse_numero};

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
}

fn build_clave() -> ClaveAcceso {
    let mut rng = StdRng::seed_from_u64(1);
    ClaveBuilder::new(test_date(), DocumentoTipo::Factura, "1790011674001")
        .ambiente(Ambiente::Produccion)
        .establecimiento("001")
        .punto_emision("002")
        .secuencial(123)
        .generar(&mut rng)
        .unwrap()
}

fn bench_modulo10(c: &mut Criterion) {
    let payload = [1u8, 2, 3, 4, 5, 6, 7, 8, 9];
    c.bench_function("modulo10_9_digits", |b| {
        b.iter(|| black_box(modulo10(black_box(&payload))));
    });
}

fn bench_modulo11(c: &mut Criterion) {
    const WEIGHTS: [u32; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];
    let digits = [1u8, 7, 9, 0, 0, 1, 1, 6, 7];
    c.bench_function("modulo11_ruc_base", |b| {
        b.iter(|| black_box(modulo11(black_box(digits).into_iter().zip(WEIGHTS))));
    });
}

fn bench_validate_cedula(c: &mut Criterion) {
    c.bench_function("validate_cedula", |b| {
        b.iter(|| black_box(validate_cedula(black_box("1234567897"))));
    });
}

fn bench_validate_ruc(c: &mut Criterion) {
    c.bench_function("validate_ruc_private", |b| {
        b.iter(|| black_box(validate_ruc(black_box("1790011674001"))));
    });
    c.bench_function("validate_ruc_natural", |b| {
        b.iter(|| black_box(validate_ruc(black_box("1234567897001"))));
    });
}

fn bench_generar_clave(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("generar_clave", |b| {
        b.iter(|| {
            let builder =
                ClaveBuilder::new(test_date(), DocumentoTipo::Factura, "1790011674001")
                    .ambiente(Ambiente::Produccion)
                    .establecimiento("001")
                    .punto_emision("002")
                    .secuencial(123);
            black_box(builder.generar(&mut rng))
        });
    });
}

fn bench_parse_clave(c: &mut Criterion) {
    let clave = build_clave();
    let value = clave.as_str().to_owned();
    c.bench_function("parse_clave", |b| {
        b.iter(|| black_box(ClaveAcceso::parse(black_box(&value))));
    });
}

fn bench_numero(c: &mut Criterion) {
    c.bench_function("format_numero", |b| {
        b.iter(|| black_box(format_numero(black_box(1), black_box(2), black_box(123))));
    });
    c.bench_function("parse_numero", |b| {
        b.iter(|| black_box(parse_numero(black_box("001-002-000000123"))));
    });
}

criterion_group!(
    benches,
    bench_modulo10,
    bench_modulo11,
    bench_validate_cedula,
    bench_validate_ruc,
    bench_generar_clave,
    bench_parse_clave,
    bench_numero,
);
criterion_main!(benches);
