use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureQuery};
use sdl2::ttf::Font;
use sdl2::video::Window;

/// Centered banner with a headline and a smaller hint line. Without a font
/// only the dimmed backdrop is drawn.
pub fn render_status_text(
    canvas: &mut Canvas<Window>,
    font: Option<&Font>,
    main: &str,
    sub: &str,
) -> Result<(), String> {
    let (window_width, window_height) = canvas.output_size()?;

    let banner_width = (window_width as f32 * 0.7) as u32;
    let banner_height = 120u32;
    let banner_x = (window_width - banner_width) as i32 / 2;
    let banner_y = (window_height - banner_height) as i32 / 2;

    canvas.set_draw_color(Color::RGBA(0, 0, 0, 180));
    canvas.fill_rect(Rect::new(banner_x, banner_y, banner_width, banner_height))?;
    canvas.set_draw_color(Color::RGB(200, 200, 200));
    canvas.draw_rect(Rect::new(banner_x, banner_y, banner_width, banner_height))?;

    let Some(font) = font else {
        return Ok(());
    };

    let center_x = window_width as i32 / 2;
    let mut y_offset = banner_y + 20;
    for (line, color) in [(main, Color::RGB(255, 255, 255)), (sub, Color::RGB(200, 200, 200))] {
        if line.is_empty() {
            continue;
        }

        let surface = font.render(line).blended(color).map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let texture = texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;

        let TextureQuery { width, height, .. } = texture.query();
        canvas.copy(
            &texture,
            None,
            Some(Rect::new(center_x - width as i32 / 2, y_offset, width, height)),
        )?;

        y_offset += height as i32 + 10;
    }

    Ok(())
}
