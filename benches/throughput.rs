use criterion::*;

use torc::RingBuffer;

fn benchmark(c: &mut Criterion) {
    c.bench_function("fill and read 1K chunks", |b| {
        let data = [0x5a; 1024];
        let mut sink = [0; 1024];

        let mut buffer = RingBuffer::new(4096).unwrap();
        // Stagger the cursors so the transfers keep crossing the end of the
        // backing array.
        buffer.fill(&data[..1000]);
        buffer.read(&mut sink[..1000]);

        b.iter(|| {
            buffer.fill(&data);
            buffer.read(&mut sink)
        })
    });

    c.bench_function("drain full buffer", |b| {
        let data = vec![0x5au8; 65536];
        let mut sink = vec![0u8; 65536];

        let mut buffer = RingBuffer::new(65536).unwrap();

        b.iter(|| {
            buffer.fill(&data);
            buffer.read(&mut sink)
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
