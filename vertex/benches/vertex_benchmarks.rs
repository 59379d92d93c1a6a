use criterion::{Criterion, black_box, criterion_group, criterion_main};

use redlilium_vertex::{Component, VertexAttr, VertexFormat, VertexLayout};

// ---------------------------------------------------------------------------
// Vertex layout construction
// ---------------------------------------------------------------------------

fn bench_vertex_layout_prebuilt(c: &mut Criterion) {
    c.bench_function("vertex_layout_position_normal_uv", |b| {
        b.iter(|| black_box(VertexLayout::position_normal_uv()));
    });
}

fn bench_vertex_layout_custom(c: &mut Criterion) {
    c.bench_function("vertex_layout_custom_build", |b| {
        b.iter(|| {
            let mut layout = VertexLayout::new();
            layout
                .add(Component::new(
                    black_box(VertexAttr::Position),
                    VertexFormat::Float3,
                ))
                .add(Component::new(
                    black_box(VertexAttr::Normal),
                    VertexFormat::Float3,
                ))
                .add(Component::new(
                    black_box(VertexAttr::Tangent),
                    VertexFormat::Float4,
                ))
                .add(Component::new(
                    black_box(VertexAttr::TexCoord0),
                    VertexFormat::Float2,
                ));
            black_box(layout)
        });
    });
}

fn bench_vertex_layout_append(c: &mut Criterion) {
    let mesh = VertexLayout::pbr();
    let instances = VertexLayout::instance_transform(1);
    c.bench_function("vertex_layout_append_instances", |b| {
        b.iter(|| {
            let mut layout = black_box(mesh);
            layout.append(black_box(&instances));
            black_box(layout)
        });
    });
}

// ---------------------------------------------------------------------------
// Lookup and hashing
// ---------------------------------------------------------------------------

fn bench_vertex_layout_lookup(c: &mut Criterion) {
    let layout = VertexLayout::pbr();
    c.bench_function("vertex_layout_component_index_by_attr", |b| {
        b.iter(|| {
            black_box(layout.component_index_by_vertex_attr(black_box(VertexAttr::TexCoord0)));
        });
    });
}

fn bench_vertex_layout_hash(c: &mut Criterion) {
    let layout = VertexLayout::pbr();
    c.bench_function("vertex_layout_hash64", |b| {
        b.iter(|| black_box(black_box(&layout).hash64()));
    });
}

fn bench_vertex_layout_combined_hash(c: &mut Criterion) {
    let mesh = VertexLayout::pbr();
    let instances = VertexLayout::instance_transform(1);
    c.bench_function("vertex_layout_combined_hash", |b| {
        b.iter(|| black_box(VertexLayout::combined_hash(black_box(&mesh), black_box(&instances))));
    });
}

criterion_group!(
    benches,
    bench_vertex_layout_prebuilt,
    bench_vertex_layout_custom,
    bench_vertex_layout_append,
    bench_vertex_layout_lookup,
    bench_vertex_layout_hash,
    bench_vertex_layout_combined_hash,
);
criterion_main!(benches);
