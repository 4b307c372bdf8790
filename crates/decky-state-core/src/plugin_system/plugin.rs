use serde::{Deserialize, Serialize};

/// A loaded (enabled) plugin as reported by the plugin loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Unique plugin name, used as the lookup key
    pub name: String,

    /// Plugin version, if the manifest declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Icon identifier shown in the plugin menu
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Title shown in the plugin view header (falls back to `name`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Error message when the plugin failed to load its frontend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,

    /// Keep the plugin's view mounted even when it is not active
    #[serde(default)]
    pub always_render: bool,
}

impl Plugin {
    /// Creates a plugin entry with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            icon: None,
            title: None,
            load_error: None,
            always_render: false,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_load_error(mut self, error: impl Into<String>) -> Self {
        self.load_error = Some(error.into());
        self
    }

    /// Title to display, falling back to the plugin name
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

/// A plugin that is installed but disabled, so only its identity is known
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisabledPlugin {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl DisabledPlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), version: None }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Entry of the derived installed-plugins list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InstalledPlugin {
    Enabled(Plugin),
    Disabled(DisabledPlugin),
}

impl InstalledPlugin {
    pub fn name(&self) -> &str {
        match self {
            InstalledPlugin::Enabled(plugin) => &plugin.name,
            InstalledPlugin::Disabled(plugin) => &plugin.name,
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            InstalledPlugin::Enabled(plugin) => plugin.version.as_deref(),
            InstalledPlugin::Disabled(plugin) => plugin.version.as_deref(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, InstalledPlugin::Enabled(_))
    }
}

impl From<Plugin> for InstalledPlugin {
    fn from(plugin: Plugin) -> Self {
        InstalledPlugin::Enabled(plugin)
    }
}

impl From<DisabledPlugin> for InstalledPlugin {
    fn from(plugin: DisabledPlugin) -> Self {
        InstalledPlugin::Disabled(plugin)
    }
}
