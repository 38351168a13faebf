//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a full-window canvas element, seeds the particle
//! list from the viewport size, and drives an update/render loop via
//! `requestAnimationFrame`. A window resize listener keeps the canvas
//! attributes and the particle count in sync with the viewport; teardown
//! cancels the pending frame and removes the listener together.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use rand::thread_rng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particle::ParticleField;
use super::render;

/// Mutable state shared between the animation loop and the resize listener.
/// Single-threaded: the two callbacks never run concurrently, so a plain
/// `RefCell` suffices.
struct FieldContext {
	field: ParticleField,
	width: f64,
	height: f64,
}

fn window_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
	)
}

/// Milliseconds on the same monotonic clock `requestAnimationFrame` uses.
fn now_ms(window: &Window) -> f64 {
	window.performance().map(|p| p.now()).unwrap_or(0.0)
}

/// A missing 2d context means rendering is silently skipped.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// Renders the ambient particle field on a viewport-sized canvas.
///
/// The canvas fills the window and resizes with it; particle count is
/// proportional to window area. The animation runs until the component is
/// unmounted.
#[component]
pub fn ParticleFieldCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (context_init, animate_init, resize_cb_init, frame_id_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		frame_id.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = window_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			return;
		};

		let mut field = ParticleField::new();
		field.resize(&mut thread_rng(), w, h, now_ms(&window));
		debug!("particle field: {} particles at {w}x{h}", field.len());

		*context_init.borrow_mut() = Some(FieldContext {
			field,
			width: w,
			height: h,
		});

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = window_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.width = nw;
				c.height = nh;
				c.field.resize(&mut thread_rng(), nw, nh, now_ms(&win));
				debug!("particle field: {} particles at {nw}x{nh}", c.field.len());
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner, frame_id_anim) = (
			context_init.clone(),
			animate_init.clone(),
			frame_id_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move |time: f64| {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				// Draw last frame's positions, then advance: the one-frame
				// lag is consistent and part of the visual rhythm.
				render::render(&c.field, &ctx, c.width, c.height);
				c.field.advance(time);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					frame_id_anim.set(Some(id));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_id_init.set(Some(id));
			}
		}
	});

	// Drop the pending frame and the resize listener together so no
	// callback outlives the component. `on_cleanup` wants `Send + Sync`;
	// wasm is single-threaded, so a `SendWrapper` satisfies the bound.
	let cleanup_state = SendWrapper::new((context, animate, resize_cb, frame_id));
	on_cleanup(move || {
		let (context, animate, resize_cb, frame_id) = cleanup_state.take();
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(id) = frame_id.take() {
			let _ = window.cancel_animation_frame(id);
		}
		if let Some(cb) = resize_cb.borrow_mut().take() {
			let _ = window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		animate.borrow_mut().take();
		context.borrow_mut().take();
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="display: block;"
		/>
	}
}
