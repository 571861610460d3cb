use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simple_vec::DynamicArray;

fn bench_push_std(c: &mut Criterion) {
	c.bench_function("std_vec_push", |b| {
		b.iter(|| {
			let mut v = Vec::new();
			for i in 0..1000 {
				v.push(black_box(i));
			}
			v
		})
	});
}

fn bench_push_back(c: &mut Criterion) {
	c.bench_function("dynamic_array_push_back", |b| {
		b.iter(|| {
			let mut v = DynamicArray::new();
			for i in 0..1000 {
				v.push_back(black_box(i));
			}
			v
		})
	});
}

fn bench_insert_front(c: &mut Criterion) {
	c.bench_function("dynamic_array_insert_front", |b| {
		b.iter(|| {
			let mut v = DynamicArray::new();
			for i in 0..200 {
				v.insert(0, black_box(i)).unwrap();
			}
			v
		})
	});
}

fn bench_reserved_push_back(c: &mut Criterion) {
	c.bench_function("dynamic_array_reserved_push_back", |b| {
		b.iter(|| {
			let mut v = DynamicArray::with_reserve(simple_vec::reserve(1000));
			for i in 0..1000 {
				v.push_back(black_box(i));
			}
			v
		})
	});
}

criterion_group!(benches, bench_push_std, bench_push_back, bench_insert_front, bench_reserved_push_back);
criterion_main!(benches);
