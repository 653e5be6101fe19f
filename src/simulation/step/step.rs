use super::{SceneCore, Stopwatch, DIRTY_NUCLEUS, DIRTY_STARS, DIRTY_VIEW};

pub(super) fn step(core: &mut SceneCore, now_ms: f64) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let step_start = if perf_on { Some(Stopwatch::start()) } else { None };

    // Apply a matured resize first so this frame already simulates and
    // renders against the new aspect.
    if let Some((width, height)) = core.resize_debounce.poll(now_ms) {
        core.viewport.width = width.max(1);
        core.viewport.height = height.max(1);
        core.camera.set_aspect(core.viewport.aspect());
        core.dirty |= DIRTY_VIEW;
    }

    // Star recycler pass
    if perf_on {
        let t0 = Stopwatch::start();
        let pass = core.stars.advance(&mut core.rng_state);
        core.perf_stats.stars_ms = t0.elapsed_ms();
        core.perf_stats.star_rate_resets = pass.rate_resets;
        core.perf_stats.star_respawns = pass.respawns;
    } else {
        core.stars.advance(&mut core.rng_state);
    }
    core.dirty |= DIRTY_STARS;

    // Nucleus surface + rigid spins
    if perf_on {
        let t0 = Stopwatch::start();
        core.nucleus.displace(&core.noise, now_ms);
        core.perf_stats.nucleus_ms = t0.elapsed_ms();
    } else {
        core.nucleus.displace(&core.noise, now_ms);
    }
    core.nucleus.spin();
    core.backdrop.spin();
    core.dirty |= DIRTY_NUCLEUS;

    // One-directional target sync: zoom always happens around whatever
    // the orbit rig currently looks at. Never copied back.
    if perf_on {
        let t0 = Stopwatch::start();
        core.trackball.target = core.orbit.target;
        core.orbit.update(&mut core.camera);
        core.trackball.update(&mut core.camera);
        refresh_view_proj(core);
        core.perf_stats.view_ms = t0.elapsed_ms();
    } else {
        core.trackball.target = core.orbit.target;
        core.orbit.update(&mut core.camera);
        core.trackball.update(&mut core.camera);
        refresh_view_proj(core);
    }
    core.dirty |= DIRTY_VIEW;

    core.frame += 1;

    if perf_on {
        core.perf_stats.star_count = core.stars.len() as u32;
        core.perf_stats.nucleus_vertices = core.nucleus.vertex_count() as u32;
        core.perf_stats.frame = core.frame as u32;
        if let Some(start) = step_start {
            core.perf_stats.step_ms = start.elapsed_ms();
        }
    }
}

pub(super) fn refresh_view_proj(core: &mut SceneCore) {
    let matrix = core.camera.projection() * core.camera.view(core.orbit.target);
    core.view_proj.copy_from_slice(&matrix.to_cols_array());
}
