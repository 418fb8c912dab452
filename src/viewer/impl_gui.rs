use crate::error::SegmentationError;
use crate::viewer::interface::Viewer;
use image::RgbImage;

struct ViewerWindow {
    original: egui::ColorImage,
    mask: egui::ColorImage,
    textures: Option<(egui::TextureHandle, egui::TextureHandle)>,
}

impl eframe::App for ViewerWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (original, mask) = self.textures.get_or_insert_with(|| {
            (
                ctx.load_texture("original", self.original.clone(), egui::TextureOptions::LINEAR),
                ctx.load_texture("mask", self.mask.clone(), egui::TextureOptions::NEAREST),
            )
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let column_width = (ui.available_width() / 2.0 - 8.0).max(1.0);

            ui.horizontal_top(|ui| {
                for (title, texture) in [("Original", &*original), ("Mask", &*mask)] {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(title).strong());
                        ui.add(
                            egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                                .max_width(column_width),
                        );
                    });
                }
            });
        });
    }
}

fn to_color_image(image: &RgbImage) -> egui::ColorImage {
    egui::ColorImage::from_rgb(
        [image.width() as usize, image.height() as usize],
        image.as_raw(),
    )
}

/// Native window; `show` blocks until the user closes it.
pub struct ViewerGui {
    title: String,
}

impl ViewerGui {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl Viewer for ViewerGui {
    fn show(&self, original: &RgbImage, mask: &RgbImage) -> Result<(), SegmentationError> {
        let window = ViewerWindow {
            original: to_color_image(original),
            mask: to_color_image(mask),
            textures: None,
        };

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 560.0]),
            ..Default::default()
        };

        eframe::run_native(&self.title, options, Box::new(|_cc| Box::new(window)))
            .map_err(|e| SegmentationError::Display(e.to_string()))
    }
}
