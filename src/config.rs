use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use vrui_camera::Camera;
use vrui_core::{Background, PartialStyle, Theme};
use vrui_ui3d::{Checkbox, Element, GridSpec, Slider, UIManager, View};

/// UI description loaded from TOML: page budget, theme, viewing camera and
/// one element tree per page.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Page width in world units.
    pub width: f32,
    /// Page height in world units.
    pub height: f32,
    pub depth: f32,
    pub theme: Theme,
    pub camera: CameraConfig,
    pub pages: Vec<NodeConfig>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 0.0,
            theme: Theme::default(),
            camera: CameraConfig::default(),
            pages: Vec::new(),
        }
    }
}

impl UiConfig {
    /// Parse a configuration file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read UI config {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse UI config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Build a manager holding every configured page. Page 0 is current.
    pub fn build_manager(&self) -> Result<UIManager> {
        let mut manager = UIManager::new(self.width, self.height)?
            .with_depth(self.depth)?
            .with_theme(self.theme);
        for (index, page) in self.pages.iter().enumerate() {
            let root = page
                .build(&self.theme)
                .with_context(|| format!("Invalid element tree on page {index}"))?;
            manager.add_page(root)?;
        }
        Ok(manager)
    }
}

/// Viewing camera used to turn pixel coordinates into pointer rays.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Horizontal rotation in degrees; -90 looks down -Z.
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Window size in pixels.
    pub viewport: [u32; 2],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 1.5],
            yaw_degrees: -90.0,
            pitch_degrees: 0.0,
            fov_degrees: 60.0,
            viewport: [1280, 720],
        }
    }
}

impl CameraConfig {
    pub fn camera(&self) -> Camera {
        let mut camera = Camera::new(Vec3::from(self.position));
        camera.yaw = self.yaw_degrees.to_radians();
        camera.pitch = self.pitch_degrees.to_radians();
        camera.fov = self.fov_degrees.to_radians();
        camera.set_aspect(self.viewport[0], self.viewport[1]);
        camera
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport[0], self.viewport[1])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    #[default]
    Element,
    Horizontal,
    Vertical,
    Grid,
    Checkbox,
    Slider,
    ImageButton,
    Text,
}

/// One element of a configured tree. Fields that do not apply to `kind`
/// are ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NodeConfig {
    pub kind: NodeKind,
    pub name: Option<String>,
    /// Free-form style map, read leniently: bad keys are logged and skipped.
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub style: serde_json::Value,
    pub children: Vec<NodeConfig>,
    pub rows: u32,
    pub columns: u32,
    pub h_space: f32,
    pub v_space: f32,
    pub text: String,
    pub image: Option<Background>,
    pub checked: bool,
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub value: Option<f32>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            kind: NodeKind::Element,
            name: None,
            style: serde_json::Value::Null,
            children: Vec::new(),
            rows: 0,
            columns: 0,
            h_space: 0.0,
            v_space: 0.0,
            text: String::new(),
            image: None,
            checked: false,
            min: None,
            max: None,
            value: None,
        }
    }
}

impl NodeConfig {
    /// Build this node and its children.
    pub fn build(&self, theme: &Theme) -> Result<Element> {
        let style = PartialStyle::from_json(&self.style);
        let mut element = match self.kind {
            NodeKind::Element => Element::new(style),
            NodeKind::Horizontal => Element::horizontal(style),
            NodeKind::Vertical => Element::vertical(style),
            NodeKind::Grid => {
                let spec = GridSpec::new(self.rows, self.columns)?
                    .with_spacing(self.h_space, self.v_space)?;
                Element::grid(spec, style)
            }
            NodeKind::Checkbox => {
                let checkbox = Checkbox::new(theme).with_checked(self.checked);
                Element::from_view(View::Checkbox(checkbox), theme, style)
            }
            NodeKind::Slider => {
                let mut slider = Slider::new(theme);
                if self.min.is_some() || self.max.is_some() {
                    slider.set_bounds(self.min.unwrap_or(0.0), self.max.unwrap_or(1.0))?;
                }
                if let Some(value) = self.value {
                    slider.set_value(value);
                }
                Element::from_view(View::Slider(slider), theme, style)
            }
            NodeKind::ImageButton => {
                let image = self
                    .image
                    .context("image_button needs an `image` texture or material")?;
                Element::image_button(image, theme, style)?
            }
            NodeKind::Text => Element::text(self.text.clone(), theme, style),
        };

        if let Some(name) = &self.name {
            element = element.with_name(name.clone());
        }
        for child in &self.children {
            let child = child.build(theme)?;
            element
                .add(child)
                .with_context(|| format!("{:?} node cannot hold children", self.kind))?;
        }
        Ok(element)
    }
}
