use criterion::{Criterion, black_box, criterion_group, criterion_main};
use slipstream::render::render_frame_svg;
use slipstream::{Projection, RaceSession, SceneRenderer, SurfaceConfig, TrackPoint, ViewTransform};

fn create_sample_session(track_points: usize, drivers: usize, frames: usize) -> RaceSession {
    let mut session = RaceSession::default();

    // a rough oval so the geometry has real extent in both axes
    session.track = (0..track_points)
        .map(|i| {
            let angle = (i as f32 / track_points as f32) * std::f32::consts::TAU;
            TrackPoint::new(5_000. * angle.cos(), 3_000. * angle.sin())
        })
        .collect();

    for driver in 0..drivers {
        let timeline = (0..frames)
            .map(|frame| {
                let angle = ((frame + driver * 7) as f32 / frames as f32) * std::f32::consts::TAU;
                TrackPoint::new(5_000. * angle.cos(), 3_000. * angle.sin())
            })
            .collect();
        session.positions.insert(driver.to_string(), timeline);
    }

    session
}

fn bench_scene_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_rendering");

    let session = create_sample_session(1_000, 20, 500);
    let config = SurfaceConfig::default();
    let renderer = SceneRenderer::new(config.clone());
    let transform = ViewTransform::fit(&session.track, &config, Projection::Scaled).unwrap();

    group.bench_function("render_single_frame", |b| {
        b.iter(|| black_box(renderer.render_frame(&session, 250, &transform)));
    });

    group.bench_function("fit_transform", |b| {
        b.iter(|| black_box(ViewTransform::fit(&session.track, &config, Projection::Scaled)));
    });

    group.finish();
}

fn bench_svg_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg_export");

    let session = create_sample_session(1_000, 20, 500);
    let config = SurfaceConfig::default();

    group.bench_function("render_frame_svg", |b| {
        b.iter(|| black_box(render_frame_svg(&session, 250, &config)));
    });

    group.finish();
}

criterion_group!(benches, bench_scene_rendering, bench_svg_export);
criterion_main!(benches);
