use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rpsl::{decode, encode, Asn, AutNum, RouteSet};

fn bench_encode(c: &mut Criterion) {
    let mut aut_num = AutNum {
        aut_num: Asn(65000),
        as_name: "AS-ACME".to_string(),
        description: "Example network\nSomewhere, US\nThird line".to_string(),
        mnt_by: "MNT-EXAMPLECORP".to_string(),
        member_of: vec!["AS65001".to_string(), "AS65002".to_string(), "AS-ACME".to_string()],
        source: "ARIN".to_string(),
        ..Default::default()
    };
    aut_num.add_extra("remarks", "benchmark object");

    let route_set = RouteSet {
        route_set: "RS-ACME".to_string(),
        members: (0..64).map(|i| format!("192.0.{i}.0/24")).collect(),
        ..Default::default()
    };

    c.bench_function("encode_aut_num", |b| b.iter(|| encode(black_box(&aut_num)).unwrap()));
    c.bench_function("encode_route_set_64_members", |b| {
        b.iter(|| encode(black_box(&route_set)).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let text = "aut-num: AS65000\n\
                as-name: AS-ACME\n\
                descr: Example network\n\
                descr: Somewhere, US\n\
                mnt-by: MNT-EXAMPLECORP\n\
                member-of: AS65001, AS65002, AS-ACME\n\
                remarks: benchmark object\n\
                source: ARIN";

    c.bench_function("decode_aut_num", |b| {
        b.iter(|| {
            let mut target = AutNum::default();
            decode(black_box(text), &mut target).unwrap();
            target
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
