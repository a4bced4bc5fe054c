//! The fixed catalog of templates and their selection metadata.

use serde::Serialize;

use crate::domain::TemplateId;

/// Small static thumbnail used when choosing a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewSwatch {
    /// Classes for the swatch container.
    pub class: &'static str,
    /// Inner HTML of the swatch.
    pub markup: &'static str,
}

/// Display metadata for one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateMeta {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: PreviewSwatch,
}

static TEMPLATES: [TemplateMeta; 5] = [
    TemplateMeta {
        id: TemplateId::NovaSpark,
        name: "Nova Spark",
        description: "Futuristic developer portfolio with neon accents",
        preview: PreviewSwatch {
            class: "bg-gray-950 p-6",
            markup: r#"<div class="h-full flex flex-col">
  <div class="h-10 border-b border-purple-500/30 mb-4 flex items-center justify-between">
    <div class="text-purple-400 font-bold">Nova</div>
    <div class="flex gap-3"><div class="h-2 w-12 bg-purple-500/50 rounded-full"></div><div class="h-2 w-12 bg-purple-500/50 rounded-full"></div><div class="h-2 w-12 bg-purple-500/50 rounded-full"></div></div>
  </div>
  <div class="flex-1 flex items-center justify-center"><div class="text-center"><div class="h-5 w-48 bg-cyan-500/30 rounded mx-auto mb-2"></div><div class="h-3 w-32 bg-purple-500/30 rounded mx-auto"></div></div></div>
  <div class="grid grid-cols-3 gap-2 mt-4"><div class="h-12 bg-purple-500/20 border border-purple-500/30 rounded-lg"></div><div class="h-12 bg-cyan-500/20 border border-cyan-500/30 rounded-lg"></div><div class="h-12 bg-purple-500/20 border border-purple-500/30 rounded-lg"></div></div>
</div>"#,
        },
    },
    TemplateMeta {
        id: TemplateId::BloomCraft,
        name: "BloomCraft",
        description: "Soft pastel portfolio for designers",
        preview: PreviewSwatch {
            class: "bg-gradient-to-br from-pink-200 via-white to-indigo-100 p-6",
            markup: r#"<div class="h-full flex flex-col">
  <div class="h-10 flex justify-center gap-6 mb-4"><div class="h-2 w-12 bg-pink-400/50 rounded-full"></div><div class="h-2 w-12 bg-indigo-400/50 rounded-full"></div><div class="h-2 w-12 bg-pink-400/50 rounded-full"></div></div>
  <div class="flex-1 flex">
    <div class="w-1/3 flex items-center justify-center"><div class="w-16 h-16 rounded-full bg-pink-300/50"></div></div>
    <div class="w-2/3 flex flex-col justify-center"><div class="h-4 w-32 bg-indigo-300/50 rounded mb-2"></div><div class="h-2 w-48 bg-pink-300/50 rounded mb-1"></div><div class="h-2 w-40 bg-pink-300/50 rounded"></div></div>
  </div>
  <div class="grid grid-cols-3 gap-2 mt-4"><div class="h-12 bg-white/70 rounded-lg shadow-sm"></div><div class="h-12 bg-white/70 rounded-lg shadow-sm"></div><div class="h-12 bg-white/70 rounded-lg shadow-sm"></div></div>
</div>"#,
        },
    },
    TemplateMeta {
        id: TemplateId::MonoGrid,
        name: "MonoGrid",
        description: "Clean, minimalist developer portfolio",
        preview: PreviewSwatch {
            class: "bg-white p-6",
            markup: r#"<div class="h-full flex flex-col">
  <div class="h-10 flex justify-between mb-4"><div></div><div class="flex flex-col gap-1"><div class="h-1 w-6 bg-black rounded-full"></div><div class="h-1 w-6 bg-black rounded-full"></div><div class="h-1 w-6 bg-black rounded-full"></div></div></div>
  <div class="flex-1 flex items-center justify-center"><div class="text-center"><div class="h-6 w-48 bg-black rounded mx-auto mb-2"></div><div class="h-3 w-32 bg-lime-500 rounded mx-auto"></div></div></div>
  <div class="grid grid-cols-2 gap-4 mt-4"><div class="h-16 border border-gray-200 rounded-lg"></div><div class="h-16 border border-gray-200 rounded-lg"></div></div>
</div>"#,
        },
    },
    TemplateMeta {
        id: TemplateId::GradientFlow,
        name: "GradientFlow",
        description: "Animated gradient, vibrant portfolio",
        preview: PreviewSwatch {
            class: "bg-gradient-to-tr from-fuchsia-500 via-purple-500 to-cyan-500 p-6",
            markup: r#"<div class="h-full flex flex-col">
  <div class="h-10 flex justify-between mb-4"><div class="text-white font-bold">FLOW</div><div class="flex gap-3"><div class="h-2 w-12 bg-white/50 rounded-full"></div><div class="h-2 w-12 bg-white/50 rounded-full"></div><div class="h-2 w-12 bg-white/50 rounded-full"></div></div></div>
  <div class="flex-1 flex items-center justify-center"><div class="text-center"><div class="h-5 w-48 bg-white/30 rounded-full mx-auto mb-2"></div><div class="h-3 w-32 bg-white/30 rounded-full mx-auto"></div></div></div>
  <div class="flex gap-2 mt-4 overflow-hidden"><div class="h-12 w-1/3 bg-white/20 rounded-xl"></div><div class="h-12 w-1/3 bg-white/20 rounded-xl"></div><div class="h-12 w-1/3 bg-white/20 rounded-xl"></div><div class="h-12 w-1/3 bg-white/20 rounded-xl"></div></div>
</div>"#,
        },
    },
    TemplateMeta {
        id: TemplateId::TechAura,
        name: "TechAura",
        description: "Professional corporate portfolio",
        preview: PreviewSwatch {
            class: "bg-gradient-to-r from-gray-50 to-blue-50 p-6",
            markup: r#"<div class="h-full flex flex-col">
  <div class="h-10 backdrop-blur-sm bg-white/70 flex justify-between items-center px-2 mb-4 rounded"><div class="font-serif font-bold text-blue-900">TA</div><div class="flex gap-3"><div class="h-2 w-10 bg-blue-900/20 rounded-full"></div><div class="h-2 w-10 bg-blue-900/20 rounded-full"></div><div class="h-2 w-10 bg-blue-900/20 rounded-full"></div></div></div>
  <div class="flex-1 flex">
    <div class="w-1/2 flex flex-col justify-center"><div class="h-4 w-32 bg-blue-900/20 rounded mb-2"></div><div class="h-2 w-48 bg-blue-900/10 rounded mb-1"></div><div class="h-2 w-40 bg-blue-900/10 rounded mb-3"></div><div class="h-8 w-24 bg-blue-600/20 rounded"></div></div>
    <div class="w-1/2 flex items-center justify-center"><div class="w-24 h-24 bg-blue-100 rounded-lg shadow-sm"></div></div>
  </div>
  <div class="grid grid-cols-3 gap-2 mt-4"><div class="h-8 bg-white rounded shadow-sm"></div><div class="h-8 bg-white rounded shadow-sm"></div><div class="h-8 bg-white rounded shadow-sm"></div></div>
</div>"#,
        },
    },
];

/// All templates, in display order.
pub fn list_templates() -> &'static [TemplateMeta] {
    &TEMPLATES
}

/// Looks up a template by its string id.
///
/// Unknown ids return the first entry.
pub fn get_template_by_id(id: &str) -> &'static TemplateMeta {
    TemplateId::resolve(id).meta()
}

impl TemplateId {
    /// Registry metadata for this template.
    pub fn meta(self) -> &'static TemplateMeta {
        match self {
            TemplateId::NovaSpark => &TEMPLATES[0],
            TemplateId::BloomCraft => &TEMPLATES[1],
            TemplateId::MonoGrid => &TEMPLATES[2],
            TemplateId::GradientFlow => &TEMPLATES[3],
            TemplateId::TechAura => &TEMPLATES[4],
        }
    }
}
