//! TechAura: corporate layout with tabbed about section and a featured quote.
//!
//! Only the first testimonial is emitted as markup. When there are more, the
//! whole list rides along in `#testimonial-rotation` and the animation script
//! cycles the featured card through it.

use crate::export::style::{StyleBundle, with_section_entrance};

pub(super) const STYLE: StyleBundle = StyleBundle {
    body_class: "bg-gradient-to-br from-blue-600 via-purple-600 to-pink-500 text-white font-serif",
    css: r#"
  .tab-content {
    display: none;
  }
  .tab-content.active {
    display: block;
  }
"#,
    animation_script: with_section_entrance!(
        r#"
    const tabButtons = document.querySelectorAll('.tab-button');
    const tabContents = document.querySelectorAll('.tab-content');
    tabButtons.forEach(button => {
      button.addEventListener('click', () => {
        const target = button.getAttribute('data-tab');
        tabButtons.forEach(btn => btn.classList.remove('active'));
        tabContents.forEach(content => content.classList.remove('active'));
        button.classList.add('active');
        document.getElementById(target).classList.add('active');
      });
    });

    const rotationData = document.getElementById('testimonial-rotation');
    const featured = document.querySelector('.featured-testimonial');
    if (rotationData && featured) {
      const quotes = JSON.parse(rotationData.textContent);
      let current = 0;
      setInterval(() => {
        current = (current + 1) % quotes.length;
        const quote = quotes[current];
        gsap.to(featured, {
          opacity: 0,
          duration: 0.4,
          onComplete: () => {
            featured.querySelector('.testimonial-text').textContent = quote.text;
            featured.querySelector('.testimonial-name').textContent = quote.name;
            featured.querySelector('.testimonial-position').textContent = quote.position;
            const avatar = featured.querySelector('.testimonial-image');
            const frame = featured.querySelector('.testimonial-avatar');
            const placeholder = featured.querySelector('.testimonial-placeholder');
            if (quote.image) {
              avatar.src = quote.image;
              avatar.alt = quote.name;
            } else {
              avatar.removeAttribute('src');
            }
            frame.classList.toggle('hidden', !quote.image);
            placeholder.classList.toggle('hidden', !!quote.image);
            gsap.to(featured, { opacity: 1, duration: 0.4 });
          }
        });
      }, 6000);
    }
"#,
        30
    ),
    colors: &[("primary", "#2563eb")],
};

pub(super) const MARKUP: &str = r##"
<nav class="sticky top-0 z-40 backdrop-blur-lg bg-white/20 shadow-lg">
  <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
    <div class="font-serif font-bold text-white text-2xl">{{ person.initials }}</div>
    <div class="hidden md:flex space-x-8">
      <a href="#home" class="text-white hover:text-yellow-300 transition-colors">Home</a>
      <a href="#about" class="text-white hover:text-yellow-300 transition-colors">About</a>
      {%- if projects %}
      <a href="#projects" class="text-white hover:text-yellow-300 transition-colors">Projects</a>
      {%- endif %}
      {%- if testimonials %}
      <a href="#testimonials" class="text-white hover:text-yellow-300 transition-colors">Testimonials</a>
      {%- endif %}
      <a href="#contact" class="text-white hover:text-yellow-300 transition-colors">Contact</a>
    </div>
  </div>
</nav>

<section id="home" data-section="hero" class="min-h-screen flex items-center">
  <div class="max-w-6xl mx-auto px-6 py-24 md:py-32">
    <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
      <div class="text-center md:text-left">
        <h1 class="text-4xl md:text-5xl font-bold mb-4 text-white">
          Hello, I&#39;m <span class="text-yellow-300">{{ person.name }}</span>
        </h1>
        <h2 class="text-xl md:text-2xl text-white mb-6">{{ person.title }}</h2>
        <p class="text-white mb-8 max-w-xl">{{ person.bio }}</p>
        <div class="flex flex-wrap gap-4 justify-center md:justify-start">
          {%- if projects %}
          <a href="#projects" class="px-6 py-3 bg-yellow-300 text-blue-700 rounded shadow-md hover:bg-yellow-400 transition-colors">View Projects</a>
          {%- endif %}
          <a href="#contact" class="px-6 py-3 bg-white text-blue-700 border border-white rounded shadow-md hover:bg-gray-100 transition-colors">Contact Me</a>
        </div>
      </div>
      <div class="flex justify-center md:justify-end">
        {%- if person.portrait %}
        <div class="w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden shadow-2xl border-4 border-white">
          <img src="{{ person.portrait }}" alt="{{ person.name }}" class="w-full h-full object-cover">
        </div>
        {%- endif %}
      </div>
    </div>
  </div>
</section>

<section id="about" class="py-20 bg-white bg-opacity-10 backdrop-blur-sm rounded-lg mx-4">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-white">About <span class="text-yellow-300">Me</span></h2>
      <div class="bg-white bg-opacity-20 rounded-lg shadow-lg p-8">
        <div class="flex border-b border-white/30 mb-6">
          <button class="px-4 py-2 font-medium text-yellow-300 border-b-2 border-yellow-300 tab-button active" data-tab="profile">Profile</button>
          {%- if education %}
          <button class="px-4 py-2 font-medium text-white hover:text-yellow-300 tab-button" data-tab="education">Education</button>
          {%- endif %}
          {%- if experience %}
          <button class="px-4 py-2 font-medium text-white hover:text-yellow-300 tab-button" data-tab="career">Career</button>
          {%- endif %}
        </div>
        <div id="profile" class="tab-content active">
          <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            <div>
              <h3 class="text-xl font-bold mb-4 text-white">Personal Information</h3>
              <p class="text-white mb-6 leading-relaxed">{{ person.bio }}</p>
              {%- if skills %}
              <div class="flex flex-wrap gap-3" data-section="skills">
                {%- for skill in skills %}
                <span class="skill-item px-3 py-1 bg-blue-50 text-blue-600 rounded-full text-sm animate-on-scroll" data-level="{{ skill.level }}" style="transition-delay: {{ loop.index0 * 50 }}ms">{{ skill.name }}</span>
                {%- endfor %}
              </div>
              {%- endif %}
            </div>
            <div>
              {%- if person.portrait %}
              <div class="rounded-full overflow-hidden shadow-md">
                <img src="{{ person.portrait }}" alt="{{ person.name }}" class="w-full h-auto">
              </div>
              {%- endif %}
            </div>
          </div>
        </div>
        {%- if education %}
        <div id="education" data-section="education" class="tab-content hidden space-y-6">
          {%- for item in education %}
          <div class="p-4 border-l-4 border-blue-600 bg-blue-50 rounded-r-lg animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
            <h3 class="text-lg font-bold text-gray-900">{{ item.degree }}</h3>
            <p class="text-blue-600">{{ item.institution }}</p>
            <p class="text-gray-500 text-sm">{{ item.year }}</p>
            {%- if item.description %}
            <p class="text-gray-600 mt-2">{{ item.description }}</p>
            {%- endif %}
          </div>
          {%- endfor %}
        </div>
        {%- endif %}
        {%- if experience %}
        <div id="career" data-section="experience" class="tab-content hidden space-y-6">
          {%- for item in experience %}
          <div class="p-4 border-l-4 border-blue-600 bg-blue-50 rounded-r-lg animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
            <h3 class="text-lg font-bold text-gray-900">{{ item.position }}</h3>
            <p class="text-blue-600">{{ item.company }}</p>
            <p class="text-gray-500 text-sm">{{ item.year }}</p>
            {%- if item.description %}
            <p class="text-gray-600 mt-2">{{ item.description }}</p>
            {%- endif %}
          </div>
          {%- endfor %}
        </div>
        {%- endif %}
      </div>
    </div>
  </div>
</section>
{% if projects %}
<section id="projects" data-section="projects" class="py-20">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-white">My <span class="text-yellow-300">Projects</span></h2>
      <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
        {%- for project in projects %}
        <div class="project-item animate-on-scroll bg-white rounded-lg shadow-lg overflow-hidden" style="transition-delay: {{ loop.index0 * 100 }}ms">
          {%- if project.image %}
          <div class="h-48 overflow-hidden">
            <img src="{{ project.image }}" alt="{{ project.title }}" class="w-full h-full object-cover">
          </div>
          {%- endif %}
          <div class="p-6">
            <h3 class="text-xl font-bold mb-2 text-gray-900">{{ project.title }}</h3>
            <p class="text-gray-600 mb-4">{{ project.description }}</p>
            {%- if project.link %}
            <a href="{{ project.link }}" target="_blank" rel="noopener noreferrer" class="inline-flex items-center gap-1 text-blue-600 hover:text-blue-800 font-medium">
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
<section id="testimonials" data-section="testimonials" class="py-20 bg-white bg-opacity-10 backdrop-blur-sm rounded-lg mx-4">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-white">Client <span class="text-yellow-300">Testimonials</span></h2>
      <div class="max-w-3xl mx-auto relative">
        {%- for item in testimonials %}
        <div class="testimonial-item featured-testimonial bg-blue-50 rounded-lg p-8 shadow-md animate-on-scroll" style="transition-delay: {{ loop.index0 * 100 }}ms">
          <div class="mb-6">
            <svg class="w-10 h-10 text-blue-300 mx-auto" fill="currentColor" viewBox="0 0 24 24">
              <path d="M14.017 21v-7.391c0-5.704 3.731-9.57 8.983-10.609l.995 2.151c-2.432.917-3.995 3.638-3.995 5.849h4v10h-9.983zm-14.017 0v-7.391c0-5.704 3.748-9.57 9-10.609l.996 2.151c-2.433.917-3.996 3.638-3.996 5.849h3.983v10h-9.983z" />
            </svg>
          </div>
          <p class="testimonial-text text-gray-600 italic text-lg mb-6">{{ item.text }}</p>
          <div class="flex items-center justify-center">
            <div class="testimonial-avatar w-12 h-12 rounded-full overflow-hidden mr-4{% if not item.image %} hidden{% endif %}">
              <img{% if item.image %} src="{{ item.image }}"{% endif %} alt="{{ item.name }}" class="testimonial-image w-full h-full object-cover">
            </div>
            <div class="testimonial-placeholder w-12 h-12 rounded-full bg-blue-200 mr-4{% if item.image %} hidden{% endif %}"></div>
            <div class="text-left">
              <h4 class="testimonial-name font-bold text-gray-900">{{ item.name }}</h4>
              <p class="testimonial-position text-sm text-gray-500">{{ item.position }}</p>
            </div>
          </div>
        </div>
        {%- endfor %}
        {%- if rotation %}
        <script type="application/json" id="testimonial-rotation">{{ rotation }}</script>
        {%- endif %}
      </div>
    </div>
  </div>
</section>
{% endif %}
<section id="contact" data-section="contact" class="py-20">
  <div class="max-w-6xl mx-auto px-6">
    <div class="animate-section">
      <h2 class="text-3xl font-bold mb-12 text-center text-white">Get In <span class="text-yellow-300">Touch</span></h2>
      <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
        <div class="bg-white rounded-lg shadow-lg p-8">
          <h3 class="text-xl font-bold mb-6 text-gray-900">Send Me a Message</h3>
          <form class="space-y-4">
            <div>
              <label for="name" class="block text-sm font-medium text-gray-700 mb-1">Your Name</label>
              <input type="text" id="name" placeholder="John Doe" class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-yellow-300 focus:border-transparent">
            </div>
            <div>
              <label for="email" class="block text-sm font-medium text-gray-700 mb-1">Your Email</label>
              <input type="email" id="email" placeholder="john@example.com" class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-yellow-300 focus:border-transparent">
            </div>
            <div>
              <label for="message" class="block text-sm font-medium text-gray-700 mb-1">Your Message</label>
              <textarea id="message" placeholder="How can I help you?" rows="5" class="w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-yellow-300 focus:border-transparent"></textarea>
            </div>
          </form>
        </div>
        <div>
          <div class="bg-white rounded-lg shadow-lg p-8 mb-8">
            <h3 class="text-xl font-bold mb-6 text-gray-900">Connect With Me</h3>
            <div class="space-y-4">
              {%- for link in social_links %}
              <a href="{{ link.url }}" target="_blank" rel="noopener noreferrer" class="social-link flex items-center gap-3 text-gray-600 hover:text-blue-600 transition-colors">
                <i class="{{ link.icon }}"></i>
                <span class="ml-2 capitalize">{{ link.platform }}</span>
              </a>
              {%- endfor %}
            </div>
          </div>
          <div class="bg-yellow-300 rounded-lg shadow-lg p-8 text-blue-700">
            <h3 class="text-xl font-bold mb-6">Let&#39;s Work Together</h3>
            <p class="mb-6">I&#39;m currently available for freelance work. If you have a project that you want to get started, think you need my help with something or just fancy saying hello, then get in touch.</p>
          </div>
        </div>
      </div>
    </div>
  </div>
</section>

<footer class="py-8 bg-white bg-opacity-20 border-t border-white/30">
  <div class="max-w-6xl mx-auto px-6 text-center">
    <p class="text-white">&copy; {{ year }} {{ person.name }}. All rights reserved.</p>
  </div>
</footer>
"##;
