use pocket_core::core::machine::Machine;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

use crate::input::KeyMap;
use crate::video::Video;

/// Runs the host loop: poll input, advance one frame, present it. Exactly
/// the contract spec.md §6 leaves to an embedding host — this is the thin,
/// not-respecified-in-detail collaborator spec.md §1 calls out.
pub fn run(machine: &mut dyn Machine, key_map: &KeyMap, scale: u32) {
    let sdl_context = sdl2::init().expect("Failed to initialize SDL2");
    let sdl_video = sdl_context.video().expect("Failed to init SDL video");

    let (width, height) = machine.display_size();
    let mut video = Video::new(&sdl_video, "pocketboy", width, height, scale);
    let mut event_pump = sdl_context.event_pump().expect("Failed to get event pump");

    let mut framebuffer = vec![0u32; (width * height) as usize];
    // Joypad byte: one bit per key, 0 = pressed (spec.md §6). All released
    // at startup.
    let mut joypad: u8 = 0xFF;

    'main: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::Tab),
                    repeat: false,
                    ..
                } => machine.cycle_palette(),

                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    if let Some(bit) = key_map.get(sc) {
                        joypad &= !(1 << bit);
                        machine.set_input(joypad);
                    }
                }

                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    if let Some(bit) = key_map.get(sc) {
                        joypad |= 1 << bit;
                        machine.set_input(joypad);
                    }
                }

                _ => {}
            }
        }

        machine.run_frame();
        machine.render_frame(&mut framebuffer);
        video.present(&framebuffer);

        // Frame timing handled by VSync (set in Video::new via present_vsync)
    }
}
