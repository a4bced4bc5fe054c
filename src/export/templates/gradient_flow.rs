//! GradientFlow: animated full-page gradient with frosted glass cards.

use crate::export::style::{StyleBundle, with_section_entrance};

pub(super) const STYLE: StyleBundle = StyleBundle {
    body_class: "font-sans",
    css: r#"
  body {
    background: linear-gradient(to top right, #f0abfc, #8b5cf6, #06b6d4);
    background-size: 400% 400%;
    animation: gradient 20s ease infinite;
  }
  @keyframes gradient {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
  }
  .text-reveal span {
    opacity: 0;
    display: inline-block;
    transition: opacity 0.5s ease;
  }
  .text-reveal.animated span {
    opacity: 1;
  }
"#,
    animation_script: with_section_entrance!(
        r#"
    document.querySelectorAll('.text-reveal').forEach(text => {
      const chars = text.textContent.split('');
      text.textContent = '';
      chars.forEach(char => {
        const span = document.createElement('span');
        span.textContent = char;
        span.style.opacity = '0';
        span.style.display = 'inline-block';
        text.appendChild(span);
      });
      gsap.to(text.querySelectorAll('span'), {
        opacity: 1,
        stagger: { each: 0.03, from: 'random' },
        duration: 0.5,
        scrollTrigger: { trigger: text, start: 'top 80%' }
      });
    });
"#,
        50
    ),
    colors: &[("primary", "#8b5cf6"), ("secondary", "#06b6d4")],
};

pub(super) const MARKUP: &str = r##"
<nav class="sticky top-0 z-40 backdrop-blur-md bg-white/10">
  <div class="max-w-6xl mx-auto px-6 py-4">
    <div class="flex justify-between items-center">
      <div class="text-xl font-bold text-white">FLOW</div>
      <div class="hidden md:flex space-x-8">
        <a href="#home" class="text-white hover:text-cyan-300 transition-colors relative group">
          Home
          <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-300 transition-all group-hover:w-full"></span>
        </a>
        <a href="#about" class="text-white hover:text-cyan-300 transition-colors relative group">
          About
          <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-300 transition-all group-hover:w-full"></span>
        </a>
        {%- if projects %}
        <a href="#projects" class="text-white hover:text-cyan-300 transition-colors relative group">
          Projects
          <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-300 transition-all group-hover:w-full"></span>
        </a>
        {%- endif %}
        {%- if skills %}
        <a href="#skills" class="text-white hover:text-cyan-300 transition-colors relative group">
          Skills
          <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-300 transition-all group-hover:w-full"></span>
        </a>
        {%- endif %}
        <a href="#contact" class="text-white hover:text-cyan-300 transition-colors relative group">
          Contact
          <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-cyan-300 transition-all group-hover:w-full"></span>
        </a>
      </div>
    </div>
  </div>
</nav>

<section id="home" data-section="hero" class="min-h-screen flex items-center relative z-10">
  <div class="max-w-6xl mx-auto px-6 py-24 md:py-32">
    <div class="text-center">
      <h1 class="text-4xl md:text-6xl font-bold mb-6 text-white text-reveal">Hi, I&#39;m {{ person.name }}</h1>
      <h2 class="text-xl md:text-2xl text-white/80 mb-8">{{ person.title }}</h2>
      <p class="text-white/70 mb-12 max-w-2xl mx-auto">{{ person.bio }}</p>
      <div class="flex flex-wrap gap-4 justify-center">
        {%- if projects %}
        <a href="#projects" class="px-8 py-4 bg-white/20 backdrop-blur-sm text-white rounded-full border border-white/30 hover:bg-white/30 transition-all">View My Work</a>
        {%- endif %}
        <a href="#contact" class="px-8 py-4 bg-white text-purple-600 rounded-full hover:bg-opacity-90 transition-all">Contact Me</a>
      </div>
    </div>
  </div>
  <div class="absolute bottom-10 left-0 right-0 flex justify-center">
    <div class="flex gap-4">
      {%- for emoji in ["✨", "🚀", "💻", "🎨", "🔮", "⚡", "🌈", "💡"] %}
      <span class="text-3xl">{{ emoji }}</span>
      {%- endfor %}
    </div>
  </div>
</section>

<section id="about" class="py-20 relative z-10">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-white text-reveal">About Me</h2>
      <div class="bg-white/10 backdrop-blur-md rounded-3xl p-8 border border-white/20">
        <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
          <div>
            <p class="text-white/80 mb-8 leading-relaxed">{{ person.bio }}</p>
            {%- if education or experience %}
            <div class="space-y-8">
              {%- if education %}
              <div data-section="education">
                <h3 class="text-xl font-bold mb-4 text-white">Education</h3>
                <div class="space-y-4">
                  {%- for item in education %}
                  <div class="bg-white/10 rounded-xl p-4 border border-white/20 animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
                    <h4 class="font-bold text-white">{{ item.degree }}</h4>
                    <p class="text-white/70">{{ item.institution }}</p>
                    <p class="text-sm text-white/50">{{ item.year }}</p>
                    {%- if item.description %}
                    <p class="text-white/70 mt-2">{{ item.description }}</p>
                    {%- endif %}
                  </div>
                  {%- endfor %}
                </div>
              </div>
              {%- endif %}
              {%- if experience %}
              <div data-section="experience">
                <h3 class="text-xl font-bold mb-4 text-white">Experience</h3>
                <div class="space-y-4">
                  {%- for item in experience %}
                  <div class="bg-white/10 rounded-xl p-4 border border-white/20 animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
                    <h4 class="font-bold text-white">{{ item.position }}</h4>
                    <p class="text-white/70">{{ item.company }}</p>
                    <p class="text-sm text-white/50">{{ item.year }}</p>
                    {%- if item.description %}
                    <p class="text-white/70 mt-2">{{ item.description }}</p>
                    {%- endif %}
                  </div>
                  {%- endfor %}
                </div>
              </div>
              {%- endif %}
            </div>
            {%- endif %}
          </div>
          <div class="flex items-center justify-center">
            {%- if person.portrait %}
            <div class="w-64 h-64 rounded-full overflow-hidden border-4 border-white/30">
              <img src="{{ person.portrait }}" alt="{{ person.name }}" class="w-full h-full object-cover">
            </div>
            {%- endif %}
          </div>
        </div>
      </div>
    </div>
  </div>
</section>
{% if skills %}
<section id="skills" data-section="skills" class="py-20 relative z-10">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-white text-reveal">My Skills</h2>
      <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
        {%- for skill in skills %}
        <div class="skill-item bg-white/10 backdrop-blur-md rounded-2xl p-6 border border-white/20 animate-on-scroll" style="transition-delay: {{ loop.index0 * 50 }}ms">
          <h3 class="font-bold text-white mb-2">{{ skill.name }}</h3>
          <div class="w-full h-2 bg-white/20 rounded-full overflow-hidden">
            <div class="h-full bg-white skill-bar" data-level="{{ skill.level }}" style="width: {{ skill.level }}%"></div>
          </div>
          <div class="text-right mt-1">
            <span class="text-sm text-white/70">{{ skill.level }}%</span>
          </div>
        </div>
        {%- endfor %}
      </div>
    </div>
  </div>
</section>
{% endif %}
{%- if projects %}
<section id="projects" data-section="projects" class="py-20 relative z-10">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-white text-reveal">My Projects</h2>
      <div class="overflow-hidden">
        <div class="flex gap-6">
          {%- for project in projects %}
          <div class="project-item animate-on-scroll min-w-[300px] md:min-w-[350px] bg-white/10 backdrop-blur-md rounded-2xl overflow-hidden border border-white/20 flex-shrink-0" style="transition-delay: {{ loop.index0 * 100 }}ms">
            {%- if project.image %}
            <div class="h-56 overflow-hidden">
              <img src="{{ project.image }}" alt="{{ project.title }}" class="w-full h-full object-cover">
            </div>
            {%- endif %}
            <div class="p-6">
              <h3 class="text-xl font-bold mb-2 text-white">{{ project.title }}</h3>
              <p class="text-white/70 mb-4">{{ project.description }}</p>
              {%- if project.link %}
              <a href="{{ project.link }}" target="_blank" rel="noopener noreferrer" class="inline-flex items-center gap-1 text-cyan-300 hover:text-white transition-colors">
                View Project <i class="fa-solid fa-arrow-up-right-from-square ml-1 text-xs"></i>
              </a>
              {%- endif %}
            </div>
          </div>
          {%- endfor %}
        </div>
      </div>
    </div>
  </div>
</section>
{% endif %}
{%- if testimonials %}
<section data-section="testimonials" class="py-20 relative z-10">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-white text-reveal">What People Say</h2>
      <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
        {%- for item in testimonials %}
        <div class="testimonial-item bg-white/10 backdrop-blur-md rounded-2xl p-6 border border-white/20 animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
          <div class="mb-4">
            <svg class="w-8 h-8 text-white/40" fill="currentColor" viewBox="0 0 24 24">
              <path d="M14.017 21v-7.391c0-5.704 3.731-9.57 8.983-10.609l.995 2.151c-2.432.917-3.995 3.638-3.995 5.849h4v10h-9.983zm-14.017 0v-7.391c0-5.704 3.748-9.57 9-10.609l.996 2.151c-2.433.917-3.996 3.638-3.996 5.849h3.983v10h-9.983z" />
            </svg>
          </div>
          <p class="text-white/80 italic mb-6">{{ item.text }}</p>
          <div class="flex items-center">
            {%- if item.image %}
            <div class="w-12 h-12 rounded-full overflow-hidden mr-4">
              <img src="{{ item.image }}" alt="{{ item.name }}" class="w-full h-full object-cover">
            </div>
            {%- else %}
            <div class="w-12 h-12 rounded-full bg-white/20 mr-4"></div>
            {%- endif %}
            <div>
              <h4 class="font-semibold text-white">{{ item.name }}</h4>
              <p class="text-sm text-white/60">{{ item.position }}</p>
            </div>
          </div>
        </div>
        {%- endfor %}
      </div>
    </div>
  </div>
</section>
{% endif %}
<section id="contact" data-section="contact" class="py-20 relative z-10">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-white text-reveal">Get In Touch</h2>
      <div class="max-w-xl mx-auto bg-white/10 backdrop-blur-md rounded-2xl p-8 border border-white/20">
        <div class="mb-8">
          <p class="text-white/80 text-center mb-6">Feel free to reach out through any of these platforms or send me a message directly.</p>
          <div class="flex justify-center gap-4">
            {%- for link in social_links %}
            <a href="{{ link.url }}" target="_blank" rel="noopener noreferrer" class="social-link w-10 h-10 flex items-center justify-center rounded-full bg-white/20 text-white hover:bg-white hover:text-purple-600 transition-colors" aria-label="{{ link.platform }}">
              <i class="{{ link.icon }}"></i>
            </a>
            {%- endfor %}
          </div>
        </div>
        <form class="space-y-4">
          <div>
            <input type="text" placeholder="Your Name" class="w-full p-4 bg-white/5 border border-white/20 rounded-xl text-white placeholder-white/50 focus:outline-none focus:border-white/50">
          </div>
          <div>
            <input type="email" placeholder="Your Email" class="w-full p-4 bg-white/5 border border-white/20 rounded-xl text-white placeholder-white/50 focus:outline-none focus:border-white/50">
          </div>
          <div>
            <textarea placeholder="Your Message" rows="4" class="w-full p-4 bg-white/5 border border-white/20 rounded-xl text-white placeholder-white/50 focus:outline-none focus:border-white/50"></textarea>
          </div>
          <button type="submit" class="w-full py-4 bg-white text-purple-600 rounded-xl font-bold hover:bg-opacity-90 transition-colors">Send Message</button>
        </form>
      </div>
    </div>
  </div>
</section>

<footer class="py-8 border-t border-white/20 relative z-10">
  <div class="max-w-6xl mx-auto px-6 text-center">
    <p class="text-white/60">&copy; {{ year }} {{ person.name }}. All rights reserved.</p>
  </div>
</footer>
"##;
