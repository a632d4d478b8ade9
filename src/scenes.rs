//! Scene mount manager.
//!
//! Purely reactive to the `revealed` flag: false→true mounts one canvas per
//! static `SceneDetail`, section by section, in record order (which fixes
//! z-stacking); true→false removes them all. Calls with an unchanged flag
//! are no-ops, so unrelated re-renders never churn the heavy canvases.

use crate::constants::SCENE_LAYER_ID_PREFIX;
use crate::core::content::{total_records, SceneDetail, SECTIONS};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

struct MountedScene {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    detail: &'static SceneDetail,
    elapsed: f64,
}

impl MountedScene {
    /// Advance the frame cycle and repaint.
    fn animate(&mut self, dt_sec: f64) {
        self.elapsed += dt_sec;
        let d = self.detail;
        let cycle = (self.elapsed / d.cycle_secs).fract();
        let frame = (d.frame_start as f64 + cycle * d.frame_count as f64) % d.frame_count as f64;

        let size = d.size_px;
        self.ctx.clear_rect(0.0, 0.0, size, size);
        let center = size / 2.0;
        let dots = d.frame_count.min(24) as f64;
        for i in 0..dots as u32 {
            let angle = (i as f64 / dots) * std::f64::consts::TAU;
            let lit = ((frame / d.frame_count as f64) * dots) as u32 == i;
            let radius = center * 0.8;
            let x = center + angle.cos() * radius;
            let y = center + angle.sin() * radius;
            self.ctx.begin_path();
            let r = if lit { size * 0.06 } else { size * 0.025 };
            _ = self
                .ctx
                .arc(x, y, r, 0.0, std::f64::consts::TAU);
            self.ctx
                .set_fill_style_str(if lit { "#000" } else { "rgba(0, 0, 0, 0.35)" });
            self.ctx.fill();
        }
    }
}

pub struct SceneSet {
    document: web::Document,
    mounted: Vec<MountedScene>,
}

impl SceneSet {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            mounted: Vec::new(),
        }
    }

    /// Bring the mounted set in line with `revealed`. Idempotent.
    pub fn sync(&mut self, revealed: bool) {
        if revealed && self.mounted.is_empty() {
            self.mount_all();
        } else if !revealed && !self.mounted.is_empty() {
            self.unmount_all();
        }
    }

    fn mount_all(&mut self) {
        for (section, group) in SECTIONS.iter().enumerate() {
            let layer_id = format!("{SCENE_LAYER_ID_PREFIX}{section}");
            let Some(layer) = self.document.get_element_by_id(&layer_id) else {
                log::error!("[scenes] missing #{layer_id}; skipping section {section}");
                continue;
            };
            for detail in group.iter() {
                match self.mount_one(&layer, detail) {
                    Ok(scene) => self.mounted.push(scene),
                    Err(e) => log::error!("[scenes] mount failed in section {section}: {e:?}"),
                }
            }
        }
        log::info!(
            "[scenes] mounted {}/{} scenes",
            self.mounted.len(),
            total_records()
        );
    }

    fn mount_one(
        &self,
        layer: &web::Element,
        detail: &'static SceneDetail,
    ) -> anyhow::Result<MountedScene> {
        let canvas: web::HtmlCanvasElement = self
            .document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{e:?}"))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        canvas.set_width(detail.size_px as u32);
        canvas.set_height(detail.size_px as u32);
        let el: &web::HtmlElement = canvas.as_ref();
        dom::set_style(el, "position", "absolute");
        dom::set_style(el, "left", &format!("{}%", detail.left_pct));
        dom::set_style(el, "top", &format!("{}%", detail.top_pct));
        dom::set_style(el, "width", &format!("{}px", detail.size_px));
        dom::set_style(el, "height", &format!("{}px", detail.size_px));
        dom::set_style(el, "z-index", &detail.z_index.to_string());
        dom::set_style(el, "pointer-events", "none");
        layer
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{e:?}"))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;

        Ok(MountedScene {
            canvas,
            ctx,
            detail,
            // Phase-offset each record so siblings do not pulse in lockstep.
            elapsed: detail.frame_start as f64 / detail.frame_count as f64 * detail.cycle_secs,
        })
    }

    fn unmount_all(&mut self) {
        for scene in self.mounted.drain(..) {
            scene.canvas.remove();
        }
        log::info!("[scenes] unmounted all scenes");
    }

    /// Per-frame repaint of whatever is mounted.
    pub fn animate(&mut self, dt_sec: f64) {
        for scene in &mut self.mounted {
            scene.animate(dt_sec);
        }
    }
}
