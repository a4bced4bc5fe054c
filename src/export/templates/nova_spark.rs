//! Nova Spark: dark developer portfolio with neon purple and cyan accents.

use crate::export::style::{StyleBundle, with_section_entrance};

pub(super) const STYLE: StyleBundle = StyleBundle {
    body_class: "bg-gray-950 text-gray-300",
    css: r#"
  .skill-bar {
    transition: width 1.5s ease-out;
  }
  .text-reveal {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.8s ease, transform 0.8s ease;
  }
  .text-reveal.animated {
    opacity: 1;
    transform: translateY(0);
  }
"#,
    animation_script: with_section_entrance!(
        r#"
    gsap.from('.hero-title', { y: 50, opacity: 0, duration: 1, ease: 'power3.out' });

    document.querySelectorAll('.skill-bar').forEach(bar => {
      gsap.from(bar, {
        width: 0,
        duration: 1.5,
        ease: 'power2.out',
        scrollTrigger: { trigger: bar, start: 'top 90%' }
      });
    });
"#,
        30
    ),
    colors: &[("primary", "#8b5cf6"), ("secondary", "#06b6d4")],
};

pub(super) const MARKUP: &str = r##"
<nav class="sticky top-0 z-40 backdrop-blur-md bg-gray-950/70 border-b border-purple-500/20">
  <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
    <div class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-purple-500 to-cyan-400">NOVA</div>
    <div class="hidden md:flex space-x-8">
      <a href="#home" class="text-gray-300 hover:text-cyan-400 transition-colors relative group">
        Home
        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-400 transition-all group-hover:w-full"></span>
      </a>
      {%- if projects %}
      <a href="#projects" class="text-gray-300 hover:text-cyan-400 transition-colors relative group">
        Projects
        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-400 transition-all group-hover:w-full"></span>
      </a>
      {%- endif %}
      {%- if skills %}
      <a href="#skills" class="text-gray-300 hover:text-cyan-400 transition-colors relative group">
        Skills
        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-400 transition-all group-hover:w-full"></span>
      </a>
      {%- endif %}
      <a href="#contact" class="text-gray-300 hover:text-cyan-400 transition-colors relative group">
        Contact
        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-400 transition-all group-hover:w-full"></span>
      </a>
    </div>
  </div>
</nav>

<section id="home" data-section="hero" class="min-h-screen flex items-center relative overflow-hidden">
  <div class="max-w-6xl mx-auto px-6 py-24 md:py-32 relative z-10">
    <div class="text-center md:text-left">
      <h1 class="hero-title text-4xl md:text-6xl font-bold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-purple-500 to-cyan-400">
        Hi, I'm {{ person.name }}{% if person.title %} – {{ person.title }}{% endif %}
      </h1>
      <p class="text-xl md:text-2xl text-gray-400 mb-8 max-w-2xl">{{ person.bio }}</p>
      <div class="flex flex-wrap gap-4 justify-center md:justify-start">
        {%- if projects %}
        <a href="#projects" class="px-6 py-3 bg-gradient-to-r from-purple-600 to-purple-800 text-white rounded-md border border-purple-500/50 shadow-lg shadow-purple-500/20 hover:shadow-purple-500/40 transition-all">View Projects</a>
        {%- endif %}
        <a href="#contact" class="px-6 py-3 bg-transparent border border-cyan-500/50 text-cyan-400 rounded-md shadow-lg shadow-cyan-500/10 hover:shadow-cyan-500/30 transition-all">Contact Me</a>
      </div>
    </div>
  </div>
  <div class="absolute top-1/4 right-10 w-64 h-64 bg-purple-500/10 rounded-full blur-3xl"></div>
  <div class="absolute bottom-1/4 left-10 w-64 h-64 bg-cyan-500/10 rounded-full blur-3xl"></div>
</section>
{% if projects %}
<section id="projects" data-section="projects" class="py-20 relative">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center bg-clip-text text-transparent bg-gradient-to-r from-purple-500 to-cyan-400">Featured Projects</h2>
      <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
        {%- for project in projects %}
        <div class="project-item animate-on-scroll bg-gray-900 rounded-xl overflow-hidden border border-purple-500/20 shadow-lg shadow-purple-500/5 hover:shadow-purple-500/20 transition-all" style="transition-delay: {{ loop.index0 * 100 }}ms">
          {%- if project.image %}
          <div class="h-48 overflow-hidden">
            <img src="{{ project.image }}" alt="{{ project.title }}" class="w-full h-full object-cover">
          </div>
          {%- endif %}
          <div class="p-6">
            <h3 class="text-xl font-bold mb-2 text-cyan-400">{{ project.title }}</h3>
            <p class="text-gray-400 mb-4">{{ project.description }}</p>
            {%- if project.link %}
            <a href="{{ project.link }}" target="_blank" rel="noopener noreferrer" class="inline-flex items-center gap-1 text-purple-400 hover:text-purple-300 font-medium">
              View Project <i class="fa-solid fa-arrow-up-right-from-square ml-1 text-xs"></i>
            </a>
            {%- endif %}
          </div>
        </div>
        {%- endfor %}
      </div>
    </div>
  </div>
</section>
{% endif %}
{%- if skills %}
<section id="skills" data-section="skills" class="py-20 bg-gray-900/50">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center bg-clip-text text-transparent bg-gradient-to-r from-purple-500 to-cyan-400">Skills &amp; Expertise</h2>
      <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
        {%- for skill in skills %}
        <div class="skill-item mb-6 animate-on-scroll" style="transition-delay: {{ loop.index0 * 50 }}ms">
          <div class="flex justify-between mb-2">
            <span class="font-medium text-gray-300">{{ skill.name }}</span>
            <span class="text-cyan-400">{{ skill.level }}%</span>
          </div>
          <div class="h-2 bg-gray-800 rounded-full overflow-hidden">
            <div class="skill-bar h-full bg-gradient-to-r from-purple-500 to-cyan-500 rounded-full" data-level="{{ skill.level }}" style="width: {{ skill.level }}%"></div>
          </div>
        </div>
        {%- endfor %}
      </div>
    </div>
  </div>
</section>
{% endif %}
{%- if experience or education %}
<section class="py-20">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center bg-clip-text text-transparent bg-gradient-to-r from-purple-500 to-cyan-400">Experience &amp; Education</h2>
      <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
        {%- if experience %}
        <div data-section="experience">
          <h3 class="text-xl font-bold mb-6 text-cyan-400">Work Experience</h3>
          <div class="space-y-8">
            {%- for item in experience %}
            <div class="relative pl-8 before:content-[''] before:absolute before:left-0 before:top-0 before:bottom-0 before:w-px before:bg-purple-500/30 animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
              <div class="absolute left-0 top-0 w-2 h-2 rounded-full bg-purple-500 -translate-x-1/2"></div>
              <h4 class="text-lg font-semibold">{{ item.position }}</h4>
              <p class="text-cyan-400 text-sm mb-1">{{ item.company }}</p>
              <p class="text-gray-500 text-sm mb-2">{{ item.year }}</p>
              {%- if item.description %}
              <p class="text-gray-400">{{ item.description }}</p>
              {%- endif %}
            </div>
            {%- endfor %}
          </div>
        </div>
        {%- endif %}
        {%- if education %}
        <div data-section="education">
          <h3 class="text-xl font-bold mb-6 text-cyan-400">Education</h3>
          <div class="space-y-8">
            {%- for item in education %}
            <div class="relative pl-8 before:content-[''] before:absolute before:left-0 before:top-0 before:bottom-0 before:w-px before:bg-purple-500/30 animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
              <div class="absolute left-0 top-0 w-2 h-2 rounded-full bg-purple-500 -translate-x-1/2"></div>
              <h4 class="text-lg font-semibold">{{ item.degree }}</h4>
              <p class="text-cyan-400 text-sm mb-1">{{ item.institution }}</p>
              <p class="text-gray-500 text-sm mb-2">{{ item.year }}</p>
              {%- if item.description %}
              <p class="text-gray-400">{{ item.description }}</p>
              {%- endif %}
            </div>
            {%- endfor %}
          </div>
        </div>
        {%- endif %}
      </div>
    </div>
  </div>
</section>
{% endif %}
{%- if testimonials %}
<section data-section="testimonials" class="py-20 bg-gray-900/50">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center bg-clip-text text-transparent bg-gradient-to-r from-purple-500 to-cyan-400">What People Say</h2>
      <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
        {%- for item in testimonials %}
        <div class="testimonial-item bg-gray-900 rounded-xl p-6 border border-purple-500/20 shadow-lg shadow-purple-500/5 animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
          <div class="flex items-center mb-4">
            {%- if item.image %}
            <div class="w-12 h-12 rounded-full overflow-hidden mr-4">
              <img src="{{ item.image }}" alt="{{ item.name }}" class="w-full h-full object-cover">
            </div>
            {%- else %}
            <div class="w-12 h-12 rounded-full bg-purple-500/20 flex items-center justify-center mr-4">
              <span class="text-purple-400 text-xl">&quot;</span>
            </div>
            {%- endif %}
            <div>
              <h4 class="font-semibold text-gray-300">{{ item.name }}</h4>
              <p class="text-sm text-gray-500">{{ item.position }}</p>
            </div>
          </div>
          <p class="text-gray-400 italic">&quot;{{ item.text }}&quot;</p>
        </div>
        {%- endfor %}
      </div>
    </div>
  </div>
</section>
{% endif %}
<section id="contact" data-section="contact" class="py-20">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center bg-clip-text text-transparent bg-gradient-to-r from-purple-500 to-cyan-400">Get In Touch</h2>
      <div class="flex flex-wrap justify-center gap-6">
        {%- for link in social_links %}
        <a href="{{ link.url }}" target="_blank" rel="noopener noreferrer" class="social-link w-14 h-14 flex items-center justify-center rounded-full bg-gray-900 border border-purple-500/30 text-gray-300 hover:text-cyan-400 hover:border-cyan-500/50 shadow-lg shadow-purple-500/10 hover:shadow-cyan-500/20 transition-all" aria-label="{{ link.platform }}">
          <i class="{{ link.icon }}"></i>
        </a>
        {%- endfor %}
      </div>
    </div>
  </div>
</section>

<footer class="py-8 border-t border-purple-500/20">
  <div class="max-w-6xl mx-auto px-6 text-center">
    <p class="text-gray-500">&copy; {{ year }} {{ person.name }}. All rights reserved.</p>
  </div>
</footer>
"##;
