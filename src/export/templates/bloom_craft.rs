//! BloomCraft: soft pastel portfolio with a timeline and skill pills.

use crate::export::style::{StyleBundle, with_section_entrance};

pub(super) const STYLE: StyleBundle = StyleBundle {
    body_class: "bg-gradient-to-br from-pink-200 via-white to-indigo-100 text-gray-800 font-serif",
    css: r#"
  .flower {
    opacity: 0;
    transform: scale(0) rotate(-20deg);
    transition: opacity 1s ease, transform 1s ease;
  }
  .flower.animated {
    opacity: 0.3;
    transform: scale(1) rotate(0);
  }
"#,
    animation_script: with_section_entrance!(
        r#"
    gsap.to('.profile-image', {
      y: 15,
      duration: 2,
      repeat: -1,
      yoyo: true,
      ease: 'sine.inOut'
    });

    document.querySelectorAll('.flower').forEach(flower => {
      gsap.to(flower, {
        opacity: 0.3,
        scale: 1,
        rotation: 0,
        duration: 1,
        scrollTrigger: { trigger: flower, start: 'top 90%' }
      });
    });
"#,
        30
    ),
    colors: &[("primary", "#ec4899"), ("secondary", "#6366f1")],
};

pub(super) const MARKUP: &str = r##"
<div class="flower absolute top-20 right-10 w-32 h-32 bg-pink-200 rounded-full opacity-30 -z-10"></div>
<div class="flower absolute top-60 left-10 w-24 h-24 bg-indigo-200 rounded-full opacity-30 -z-10"></div>
<div class="flower absolute bottom-40 right-20 w-40 h-40 bg-pink-100 rounded-full opacity-30 -z-10"></div>
<div class="flower absolute bottom-20 left-20 w-20 h-20 bg-indigo-100 rounded-full opacity-30 -z-10"></div>
{%- set has_about = skills or education or experience %}

<nav class="sticky top-0 z-40 bg-white/80 backdrop-blur-sm shadow-sm">
  <div class="max-w-6xl mx-auto px-6 py-4">
    <div class="flex justify-center space-x-10">
      <a href="#home" class="text-gray-700 hover:text-pink-500 transition-colors relative group">
        Home
        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-pink-400 transition-all group-hover:w-full"></span>
      </a>
      {%- if has_about %}
      <a href="#about" class="text-gray-700 hover:text-pink-500 transition-colors relative group">
        About
        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-pink-400 transition-all group-hover:w-full"></span>
      </a>
      {%- endif %}
      {%- if projects %}
      <a href="#portfolio" class="text-gray-700 hover:text-pink-500 transition-colors relative group">
        Portfolio
        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-pink-400 transition-all group-hover:w-full"></span>
      </a>
      {%- endif %}
      <a href="#contact" class="text-gray-700 hover:text-pink-500 transition-colors relative group">
        Contact
        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-pink-400 transition-all group-hover:w-full"></span>
      </a>
    </div>
  </div>
</nav>

<section id="home" data-section="hero" class="min-h-screen flex items-center">
  <div class="max-w-6xl mx-auto px-6 py-24 md:py-32">
    <div class="flex flex-col md:flex-row items-center gap-12">
      {%- if person.portrait %}
      <div class="profile-image w-64 h-64 rounded-full overflow-hidden border-8 border-white shadow-xl">
        <img src="{{ person.portrait }}" alt="{{ person.name }}" class="w-full h-full object-cover">
      </div>
      {%- endif %}
      <div class="text-center md:text-left">
        <h1 class="text-4xl md:text-5xl font-bold mb-4 text-gray-800">
          Hello, I'm <span class="text-pink-500">{{ person.name }}</span>
        </h1>
        <h2 class="text-xl md:text-2xl text-indigo-600 mb-6">{{ person.title }}</h2>
        <p class="text-gray-600 mb-8 max-w-xl leading-relaxed">{{ person.bio }}</p>
        <div class="flex flex-wrap gap-4 justify-center md:justify-start">
          {%- if projects %}
          <a href="#portfolio" class="px-6 py-3 bg-pink-500 text-white rounded-full shadow-md hover:shadow-lg transition-all">View My Work</a>
          {%- endif %}
          <a href="#contact" class="px-6 py-3 bg-white text-pink-500 border border-pink-500 rounded-full shadow-md hover:shadow-lg transition-all">Contact Me</a>
        </div>
      </div>
    </div>
  </div>
</section>
{% if has_about %}
<section id="about" class="py-20 bg-white/70">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-gray-800">About <span class="text-pink-500">Me</span></h2>
      {%- if education or experience %}
      <div class="max-w-3xl mx-auto">
        <div class="relative border-l-2 border-indigo-200 pl-8 ml-4">
          {%- if education %}
          <div data-section="education">
            {%- for item in education %}
            <div class="mb-12 relative animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
              <div class="absolute -left-12 top-0 w-6 h-6 rounded-full bg-pink-100 border-2 border-pink-400 flex items-center justify-center">
                <div class="w-2 h-2 rounded-full bg-pink-500"></div>
              </div>
              <div class="bg-pink-50 rounded-lg p-6 shadow-md">
                <span class="text-sm text-pink-500 font-medium">{{ item.year }}</span>
                <h3 class="text-xl font-bold text-gray-800 mt-1">{{ item.degree }}</h3>
                <p class="text-indigo-600 mb-2">{{ item.institution }}</p>
                {%- if item.description %}
                <p class="text-gray-600">{{ item.description }}</p>
                {%- endif %}
              </div>
            </div>
            {%- endfor %}
          </div>
          {%- endif %}
          {%- if experience %}
          <div data-section="experience">
            {%- for item in experience %}
            <div class="mb-12 relative animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
              <div class="absolute -left-12 top-0 w-6 h-6 rounded-full bg-indigo-100 border-2 border-indigo-400 flex items-center justify-center">
                <div class="w-2 h-2 rounded-full bg-indigo-500"></div>
              </div>
              <div class="bg-indigo-50 rounded-lg p-6 shadow-md">
                <span class="text-sm text-indigo-500 font-medium">{{ item.year }}</span>
                <h3 class="text-xl font-bold text-gray-800 mt-1">{{ item.position }}</h3>
                <p class="text-pink-600 mb-2">{{ item.company }}</p>
                {%- if item.description %}
                <p class="text-gray-600">{{ item.description }}</p>
                {%- endif %}
              </div>
            </div>
            {%- endfor %}
          </div>
          {%- endif %}
        </div>
      </div>
      {%- endif %}
      {%- if skills %}
      <div class="mt-16" data-section="skills">
        <h3 class="text-2xl font-bold mb-8 text-center text-gray-800">My <span class="text-pink-500">Skills</span></h3>
        <div class="flex flex-wrap justify-center gap-4">
          {%- for skill in skills %}
          <span class="skill-item px-6 py-3 bg-white rounded-full shadow-md text-gray-800 border border-pink-200 animate-on-scroll" data-level="{{ skill.level }}" style="transition-delay: {{ loop.index0 * 50 }}ms">{{ skill.name }}</span>
          {%- endfor %}
        </div>
      </div>
      {%- endif %}
    </div>
  </div>
</section>
{% endif %}
{%- if projects %}
<section id="portfolio" data-section="projects" class="py-20">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-gray-800">My <span class="text-pink-500">Portfolio</span></h2>
      <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
        {%- for project in projects %}
        <div class="project-item animate-on-scroll bg-white rounded-lg overflow-hidden shadow-lg" style="transition-delay: {{ loop.index0 * 100 }}ms">
          {%- if project.image %}
          <div class="h-56 overflow-hidden">
            <img src="{{ project.image }}" alt="{{ project.title }}" class="w-full h-full object-cover">
          </div>
          {%- endif %}
          <div class="p-6">
            <h3 class="text-xl font-bold mb-2 text-gray-800">{{ project.title }}</h3>
            <p class="text-gray-600 mb-4">{{ project.description }}</p>
            {%- if project.link %}
            <a href="{{ project.link }}" target="_blank" rel="noopener noreferrer" class="inline-flex items-center gap-1 text-pink-500 hover:text-pink-600 font-medium">
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
{%- if testimonials %}
<section data-section="testimonials" class="py-20 bg-white/70">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-gray-800">Client <span class="text-pink-500">Testimonials</span></h2>
      <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
        {%- for item in testimonials %}
        <div class="testimonial-item bg-pink-50 rounded-lg p-6 shadow-md animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
          <div class="flex items-center mb-4">
            {%- if item.image %}
            <div class="w-12 h-12 rounded-full overflow-hidden mr-4 border-2 border-pink-200">
              <img src="{{ item.image }}" alt="{{ item.name }}" class="w-full h-full object-cover">
            </div>
            {%- else %}
            <div class="w-12 h-12 rounded-full bg-pink-200 flex items-center justify-center mr-4">
              <span class="text-pink-500 text-xl">&quot;</span>
            </div>
            {%- endif %}
            <div>
              <h4 class="font-semibold text-gray-800">{{ item.name }}</h4>
              <p class="text-sm text-indigo-600">{{ item.position }}</p>
            </div>
          </div>
          <p class="text-gray-600 italic">&quot;{{ item.text }}&quot;</p>
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
      <h2 class="text-3xl font-bold mb-12 text-center text-gray-800">Get In <span class="text-pink-500">Touch</span></h2>
      <div class="max-w-md mx-auto bg-white rounded-lg shadow-lg p-8 border border-pink-100">
        <div class="mb-8">
          <h3 class="text-xl font-bold mb-4 text-gray-800">Connect With Me</h3>
          <p class="text-gray-600 mb-6">Feel free to reach out through any of these platforms. I&#39;d love to hear from you!</p>
          <div class="flex flex-wrap justify-center gap-4">
            {%- for link in social_links %}
            <a href="{{ link.url }}" target="_blank" rel="noopener noreferrer" class="social-link w-10 h-10 flex items-center justify-center rounded-full bg-pink-100 text-pink-500 hover:bg-pink-500 hover:text-white transition-colors" aria-label="{{ link.platform }}">
              <i class="{{ link.icon }}"></i>
            </a>
            {%- endfor %}
          </div>
        </div>
        <div class="space-y-4">
          <div class="relative">
            <input type="text" placeholder="Your Name" class="w-full px-4 py-3 border-2 border-pink-200 rounded-lg focus:outline-none focus:border-pink-500 transition-colors">
            <div class="absolute -bottom-1 left-4 right-4 h-px bg-pink-300 opacity-50"></div>
          </div>
          <div class="relative">
            <input type="email" placeholder="Your Email" class="w-full px-4 py-3 border-2 border-pink-200 rounded-lg focus:outline-none focus:border-pink-500 transition-colors">
            <div class="absolute -bottom-1 left-4 right-4 h-px bg-pink-300 opacity-50"></div>
          </div>
          <div class="relative">
            <textarea placeholder="Your Message" rows="4" class="w-full px-4 py-3 border-2 border-pink-200 rounded-lg focus:outline-none focus:border-pink-500 transition-colors"></textarea>
            <div class="absolute -bottom-1 left-4 right-4 h-px bg-pink-300 opacity-50"></div>
          </div>
          <button class="w-full py-3 bg-pink-500 text-white rounded-lg shadow-md hover:shadow-lg transition-all">Send Message</button>
        </div>
      </div>
    </div>
  </div>
</section>

<footer class="py-8 bg-white/80 border-t border-pink-200">
  <div class="max-w-6xl mx-auto px-6 text-center">
    <p class="text-gray-600">&copy; {{ year }} {{ person.name }}. All rights reserved.</p>
  </div>
</footer>
"##;
