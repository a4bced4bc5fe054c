//! MonoGrid: black-and-white grid with a single lime accent.

use crate::export::style::{StyleBundle, with_section_entrance};

pub(super) const STYLE: StyleBundle = StyleBundle {
    body_class: "bg-white text-gray-900 font-sans",
    css: r#"
  .text-reveal {
    clip-path: polygon(0% 0%, 0% 0%, 0% 100%, 0% 100%);
    transition: clip-path 1s ease;
  }
  .text-reveal.animated {
    clip-path: polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%);
  }
"#,
    animation_script: with_section_entrance!(
        r#"
    document.querySelectorAll('.text-reveal').forEach(text => {
      gsap.to(text, {
        clipPath: 'polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%)',
        duration: 1,
        ease: 'power2.out',
        scrollTrigger: { trigger: text, start: 'top 80%' }
      });
    });
"#,
        30
    ),
    colors: &[("primary", "#65a30d")],
};

pub(super) const MARKUP: &str = r##"
<nav class="fixed top-0 right-0 z-40 p-6">
  <button class="w-12 h-12 flex flex-col items-center justify-center gap-1.5 bg-white rounded-full shadow-md focus:outline-none" aria-label="Menu">
    <span class="w-6 h-0.5 bg-black"></span>
    <span class="w-6 h-0.5 bg-black"></span>
    <span class="w-6 h-0.5 bg-black"></span>
  </button>
</nav>

<section id="home" data-section="hero" class="min-h-screen flex items-center">
  <div class="max-w-6xl mx-auto px-6 py-24 md:py-32 w-full">
    <div class="text-center md:text-left">
      <h1 class="text-6xl md:text-8xl font-bold mb-8 text-reveal overflow-hidden">
        HELLO, I&#39;M
        <br />
        {{ person.name | upper }}
      </h1>
      <h2 class="text-xl md:text-2xl text-lime-500 mb-8">{{ person.title }}</h2>
      <div class="flex flex-wrap gap-4 justify-center md:justify-start">
        {%- if projects %}
        <a href="#projects" class="px-8 py-3 bg-black text-white hover:bg-lime-500 transition-colors">View Projects</a>
        {%- endif %}
        <a href="#contact" class="px-8 py-3 border border-black text-black hover:bg-black hover:text-white transition-colors">Contact Me</a>
      </div>
    </div>
  </div>
</section>

<section id="about" class="py-20 bg-gray-50">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-4xl font-bold mb-16 text-reveal overflow-hidden">ABOUT</h2>
      <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
        <div>
          <p class="text-gray-600 mb-8 leading-relaxed">{{ person.bio }}</p>
          {%- if education or experience %}
          <div class="space-y-8">
            {%- if education %}
            <div data-section="education">
              <h3 class="text-xl font-bold mb-4">Education</h3>
              <div class="space-y-4">
                {%- for item in education %}
                <div class="border-l-2 border-lime-500 pl-4 animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
                  <h4 class="font-bold">{{ item.degree }}</h4>
                  <p class="text-gray-600">{{ item.institution }}</p>
                  <p class="text-sm text-gray-500">{{ item.year }}</p>
                  {%- if item.description %}
                  <p class="text-gray-600 mt-1">{{ item.description }}</p>
                  {%- endif %}
                </div>
                {%- endfor %}
              </div>
            </div>
            {%- endif %}
            {%- if experience %}
            <div class="mt-8" data-section="experience">
              <h3 class="text-xl font-bold mb-4">Experience</h3>
              <div class="space-y-4">
                {%- for item in experience %}
                <div class="border-l-2 border-lime-500 pl-4 animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
                  <h4 class="font-bold">{{ item.position }}</h4>
                  <p class="text-gray-600">{{ item.company }}</p>
                  <p class="text-sm text-gray-500">{{ item.year }}</p>
                  {%- if item.description %}
                  <p class="text-gray-600 mt-1">{{ item.description }}</p>
                  {%- endif %}
                </div>
                {%- endfor %}
              </div>
            </div>
            {%- endif %}
          </div>
          {%- endif %}
        </div>
        <div>
          {%- if person.portrait %}
          <div class="aspect-square overflow-hidden">
            <img src="{{ person.portrait }}" alt="{{ person.name }}" class="w-full h-full object-cover">
          </div>
          {%- endif %}
        </div>
      </div>
    </div>
  </div>
</section>
{% if skills %}
<section id="skills" data-section="skills" class="py-20">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-4xl font-bold mb-16 text-reveal overflow-hidden">SKILLS</h2>
      <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
        {%- for skill in skills %}
        <div class="skill-item p-6 border border-gray-200 hover:border-lime-500 group transition-colors animate-on-scroll" style="transition-delay: {{ loop.index0 * 50 }}ms">
          <div class="flex justify-between items-center mb-2">
            <h3 class="font-bold group-hover:text-lime-500 transition-colors">{{ skill.name }}</h3>
            <span class="text-sm text-gray-500">{{ skill.level }}%</span>
          </div>
          <div class="w-full h-1 bg-gray-200">
            <div class="h-full bg-lime-500 skill-bar" data-level="{{ skill.level }}" style="width: {{ skill.level }}%"></div>
          </div>
        </div>
        {%- endfor %}
      </div>
    </div>
  </div>
</section>
{% endif %}
{%- if projects %}
<section id="projects" data-section="projects" class="py-20 bg-gray-50">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-4xl font-bold mb-16 text-reveal overflow-hidden">PROJECTS</h2>
      <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
        {%- for project in projects %}
        <div class="project-item group animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
          <div class="overflow-hidden">
            {%- if project.image %}
            <img src="{{ project.image }}" alt="{{ project.title }}" class="w-full aspect-video object-cover transition-transform duration-500 group-hover:scale-105">
            {%- else %}
            <div class="w-full aspect-video bg-gray-200"></div>
            {%- endif %}
          </div>
          <div class="p-6 border border-t-0 border-gray-200 group-hover:border-lime-500 transition-colors">
            <h3 class="text-xl font-bold mb-2 group-hover:text-lime-500 transition-colors">{{ project.title }}</h3>
            <p class="text-gray-600 mb-4">{{ project.description }}</p>
            {%- if project.link %}
            <a href="{{ project.link }}" target="_blank" rel="noopener noreferrer" class="inline-flex items-center gap-1 text-black hover:text-lime-500 transition-colors font-medium">
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
<section data-section="testimonials" class="py-20">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-4xl font-bold mb-16 text-reveal overflow-hidden">TESTIMONIALS</h2>
      <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
        {%- for item in testimonials %}
        <div class="testimonial-item p-6 border border-gray-200 hover:border-lime-500 transition-colors animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
          <p class="text-gray-600 italic mb-6">&quot;{{ item.text }}&quot;</p>
          <div class="flex items-center">
            {%- if item.image %}
            <div class="w-12 h-12 rounded-full overflow-hidden mr-4">
              <img src="{{ item.image }}" alt="{{ item.name }}" class="w-full h-full object-cover">
            </div>
            {%- else %}
            <div class="w-12 h-12 rounded-full bg-gray-200 mr-4"></div>
            {%- endif %}
            <div>
              <h4 class="font-bold">{{ item.name }}</h4>
              <p class="text-sm text-gray-500">{{ item.position }}</p>
            </div>
          </div>
        </div>
        {%- endfor %}
      </div>
    </div>
  </div>
</section>
{% endif %}
<section id="contact" data-section="contact" class="py-20 bg-gray-50">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-4xl font-bold mb-16 text-reveal overflow-hidden">CONTACT</h2>
      <div class="max-w-xl mx-auto">
        <div class="mb-12">
          <p class="text-gray-600 mb-8 text-center">Interested in working together? Feel free to reach out through any of these platforms.</p>
          <div class="flex justify-center gap-6">
            {%- for link in social_links %}
            <a href="{{ link.url }}" target="_blank" rel="noopener noreferrer" class="social-link text-gray-600 hover:text-lime-500 transition-colors" aria-label="{{ link.platform }}">
              <i class="{{ link.icon }}"></i>
            </a>
            {%- endfor %}
          </div>
        </div>
        <form class="space-y-6">
          <div>
            <input type="text" placeholder="Your Name" class="w-full p-4 border border-gray-200 focus:border-lime-500 outline-none transition-colors">
          </div>
          <div>
            <input type="email" placeholder="Your Email" class="w-full p-4 border border-gray-200 focus:border-lime-500 outline-none transition-colors">
          </div>
          <div>
            <textarea placeholder="Your Message" rows="5" class="w-full p-4 border border-gray-200 focus:border-lime-500 outline-none transition-colors"></textarea>
          </div>
          <button type="submit" class="w-full py-4 bg-black text-white hover:bg-lime-500 transition-colors">Send Message</button>
        </form>
      </div>
    </div>
  </div>
</section>

<footer class="py-8 border-t border-gray-200">
  <div class="max-w-6xl mx-auto px-6 text-center">
    <p class="text-gray-600">&copy; {{ year }} {{ person.name }}. All rights reserved.</p>
  </div>
</footer>
"##;
