//! Global CSS styles for the Medhavy site.
//!
//! Light, blue-accented education theme.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --background: #ffffff;
  --foreground: #0f172a;
  --muted: #f1f5f9;
  --muted-foreground: #64748b;
  --card: #ffffff;
  --border: #e2e8f0;

  /* Brand blue */
  --primary: #2563eb;
  --primary-dark: #1e3a8a;
  --primary-soft: rgba(37, 99, 235, 0.1);
  --primary-glow: rgba(37, 99, 235, 0.25);
  --sky: #0ea5e9;
  --indigo: #4f46e5;

  /* Semantic */
  --success: #16a34a;
  --success-soft: #dcfce7;
  --danger: #dc2626;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --font-serif: Georgia, 'Times New Roman', serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;
  --text-4xl: 4rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 700ms ease;
  --transition-slow: 1000ms ease-out;

  --radius: 1rem;
  --radius-full: 9999px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.6;
  color: var(--foreground);
  background: var(--background);
  -webkit-font-smoothing: antialiased;
}

button {
  font: inherit;
  cursor: pointer;
  border: none;
  background: none;
  color: inherit;
}

button:disabled {
  cursor: not-allowed;
  opacity: 0.6;
}

a {
  color: inherit;
  text-decoration: none;
}

ul {
  list-style: none;
}

/* === Layout === */
.page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.page-main {
  flex: 1;
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.container.narrow {
  max-width: 900px;
}

.centered {
  text-align: center;
  justify-content: center;
}

.section-heading {
  text-align: center;
  max-width: 48rem;
  margin: 0 auto 4rem;
}

.section-heading h2 {
  font-size: var(--text-3xl);
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: 1rem;
}

/* === Typography Helpers === */
.text-primary { color: var(--primary); }
.strong { font-weight: 600; }
.small { font-size: var(--text-xs); color: var(--muted-foreground); }
.serif { font-family: var(--font-serif); }
.serif-italic { font-family: var(--font-serif); font-style: italic; }
.invisible { opacity: 0; }

.lead {
  font-size: var(--text-lg);
  color: var(--muted-foreground);
  line-height: 1.7;
}

.kicker {
  font-size: var(--text-sm);
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--primary);
  margin-bottom: 0.75rem;
}

.pill {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  width: fit-content;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--muted-foreground);
  background: var(--muted);
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  padding: 0.5rem 1rem;
  margin-bottom: 1.5rem;
}

.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 2rem;
  box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
  transition: box-shadow var(--transition-normal), border-color var(--transition-normal), transform var(--transition-normal);
}

.card:hover {
  box-shadow: 0 20px 40px rgba(37, 99, 235, 0.1);
  border-color: #bfdbfe;
}

.glyph {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  line-height: 1;
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost, .btn-secondary {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.6rem 1.25rem;
  border-radius: var(--radius-full);
  font-size: var(--text-sm);
  font-weight: 500;
  transition: all var(--transition-fast);
  white-space: nowrap;
}

.btn-primary {
  background: var(--primary);
  color: #ffffff;
  box-shadow: 0 8px 20px var(--primary-glow);
}

.btn-primary:hover:not(:disabled) {
  background: #1d4ed8;
  box-shadow: 0 12px 28px var(--primary-glow);
}

.btn-outline {
  border: 1px solid var(--border);
  background: transparent;
}

.btn-outline:hover:not(:disabled) {
  background: var(--primary);
  border-color: var(--primary);
  color: #ffffff;
}

.btn-outline.on-dark {
  border-color: rgba(255, 255, 255, 0.3);
  color: #ffffff;
}

.btn-outline.on-dark:hover:not(:disabled) {
  background: rgba(255, 255, 255, 0.1);
  border-color: rgba(255, 255, 255, 0.5);
}

.btn-ghost:hover:not(:disabled) {
  background: var(--muted);
}

.btn-secondary {
  background: #ffffff;
  color: var(--foreground);
}

.btn-secondary:hover:not(:disabled) {
  background: var(--muted);
}

.btn-lg {
  height: 3rem;
  padding: 0 2rem;
  font-size: var(--text-base);
}

.btn-icon {
  width: 2.5rem;
  height: 2.5rem;
  padding: 0;
  flex-shrink: 0;
}

.btn-block {
  width: 100%;
  margin-top: 0.5rem;
}

.btn-arrow {
  transition: transform var(--transition-fast);
}

button:hover .btn-arrow {
  transform: translateX(4px);
}

.icon-btn {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: var(--radius-full);
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background: var(--muted);
  transition: all var(--transition-fast);
}

.icon-btn:hover {
  background: var(--primary);
  color: #ffffff;
}

.spinner {
  width: 1rem;
  height: 1rem;
  border: 2px solid rgba(255, 255, 255, 0.4);
  border-top-color: #ffffff;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Reveal Transitions === */
.reveal,
.reveal .feature-media,
.reveal .feature-copy,
.reveal .stat-card,
.reveal .partner-card,
.reveal .leader-card,
.reveal .core-value,
.reveal .slide-from-left,
.reveal .slide-from-right {
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal { opacity: 0; transform: translateY(2rem); }
.reveal.revealed { opacity: 1; transform: none; }

.reveal .partner-card,
.reveal .leader-card,
.reveal .core-value { opacity: 0; transform: translateY(2rem); }

.reveal .stat-card { opacity: 0; transform: translateX(2rem); }
.reveal .slide-from-left { opacity: 0; transform: translateX(-3rem); }
.reveal .slide-from-right { opacity: 0; transform: translateX(3rem); transition-delay: 300ms; }

.revealed .partner-card,
.revealed .leader-card,
.revealed .core-value,
.revealed .stat-card,
.revealed .slide-from-left,
.revealed .slide-from-right { opacity: 1; transform: none; }

/* Sections that animate their children only */
.feature-grid.reveal,
.stats-inner.reveal,
.mission-grid.reveal { opacity: 1; transform: none; }

.enter {
  opacity: 0;
  transform: translateY(2rem);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.enter.entered { opacity: 1; transform: none; }
.enter.delayed { transition-delay: 300ms; }

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 50;
  width: 100%;
  background: transparent;
  transition: all var(--transition-normal);
}

.site-header.scrolled {
  background: rgba(255, 255, 255, 0.85);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
  box-shadow: 0 1px 3px rgba(15, 23, 42, 0.06);
}

.header-bar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 4rem;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.brand-mark {
  width: 2rem;
  height: 2rem;
  border-radius: 0.5rem;
  background: var(--primary);
  color: #ffffff;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-sm);
}

.brand-name {
  font-size: 1.25rem;
  font-weight: 700;
  letter-spacing: -0.01em;
  transition: color var(--transition-fast);
}

.brand:hover .brand-name { color: var(--primary); }

.header-links {
  display: flex;
  gap: 0.25rem;
}

.nav-link {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--muted-foreground);
  padding: 0.5rem 1rem;
  border-radius: var(--radius-full);
  transition: all var(--transition-fast);
  text-align: left;
}

.nav-link:hover {
  color: var(--foreground);
  background: var(--muted);
}

.header-actions {
  display: flex;
  gap: 0.75rem;
}

.menu-toggle { display: none; }

.mobile-menu {
  display: none;
  max-height: 0;
  overflow: hidden;
  transition: max-height var(--transition-normal);
}

.mobile-links {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1rem 1.5rem;
}

.mobile-actions {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  margin-top: 0.5rem;
  padding-top: 0.5rem;
  border-top: 1px solid var(--border);
}

@media (max-width: 768px) {
  .header-links, .header-actions { display: none; }
  .menu-toggle { display: inline-flex; }
  .mobile-menu { display: block; }
  .mobile-menu.open {
    max-height: 20rem;
    background: rgba(255, 255, 255, 0.95);
    border-bottom: 1px solid var(--border);
  }
}

/* === Hero === */
.hero {
  position: relative;
  padding: 7rem 0 8rem;
  overflow: hidden;
}

.hero-glow {
  position: absolute;
  border-radius: 50%;
  filter: blur(64px);
  background: rgba(37, 99, 235, 0.06);
  z-index: -1;
}

.hero-glow-left { top: 5rem; left: 2.5rem; width: 18rem; height: 18rem; }
.hero-glow-right { bottom: 5rem; right: 2.5rem; width: 24rem; height: 24rem; }

.hero-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 5rem;
  align-items: center;
}

.hero-copy {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.hero-title {
  font-size: var(--text-4xl);
  font-weight: 700;
  letter-spacing: -0.03em;
  line-height: 1.05;
}

.hero-title span { display: block; }

.hero-lead {
  font-size: 1.25rem;
  color: var(--muted-foreground);
  max-width: 36rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 1rem;
}

.hero-stage { position: relative; }

.typewriter-cursor {
  display: inline-block;
  margin-left: 0.15rem;
  animation: blink 1s step-end infinite;
}

.typewriter-slot {
  display: inline-block;
  min-width: 1ch;
  min-height: 1em;
}

@keyframes blink {
  50% { opacity: 0; }
}

/* === Carousel === */
.carousel {
  position: relative;
  aspect-ratio: 4 / 3;
  border-radius: var(--radius);
  background: linear-gradient(135deg, var(--muted), #f8fafc);
  border: 1px solid var(--border);
  box-shadow: 0 25px 50px rgba(15, 23, 42, 0.15);
  overflow: hidden;
}

.carousel-dots {
  position: absolute;
  top: 1.25rem;
  left: 1.25rem;
  display: flex;
  gap: 0.5rem;
  z-index: 10;
}

.dot {
  width: 0.625rem;
  height: 0.625rem;
  border-radius: var(--radius-full);
  background: rgba(15, 23, 42, 0.3);
  transition: all var(--transition-normal);
}

.dot:hover { background: rgba(15, 23, 42, 0.5); }
.dot.active { width: 2rem; background: var(--foreground); }

.carousel-slide {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  text-align: center;
  animation: slide-in 500ms ease;
}

.carousel-slide h3 {
  font-size: var(--text-xl);
  font-weight: 700;
  margin-bottom: 0.75rem;
}

.carousel-slide p {
  color: var(--muted-foreground);
  max-width: 24rem;
}

@keyframes slide-in {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: none; }
}

.slide-icon {
  width: 4rem;
  height: 4rem;
  border-radius: var(--radius);
  background: var(--primary-soft);
  color: var(--primary);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-xl);
  margin-bottom: 1.5rem;
}

.carousel-arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  background: rgba(255, 255, 255, 0.9);
  box-shadow: 0 8px 20px rgba(15, 23, 42, 0.12);
  z-index: 10;
}

.carousel-arrow.prev { left: 1rem; }
.carousel-arrow.next { right: 1rem; }

.grid-texture {
  position: absolute;
  inset: 0;
  opacity: 0.03;
  pointer-events: none;
  background-image:
    linear-gradient(to right, currentColor 1px, transparent 1px),
    linear-gradient(to bottom, currentColor 1px, transparent 1px);
  background-size: 40px 40px;
}

.grid-texture.light {
  opacity: 0.1;
  color: #ffffff;
  background-size: 30px 30px;
}

.badge {
  position: absolute;
  border-radius: var(--radius-full);
  padding: 0.5rem 1rem;
  font-size: var(--text-sm);
  font-weight: 500;
  box-shadow: 0 8px 20px rgba(15, 23, 42, 0.12);
}

.badge-top { top: -1rem; right: -1rem; background: var(--background); border: 1px solid var(--border); }
.badge-bottom { bottom: -1rem; left: -1rem; background: var(--primary); color: #ffffff; }

/* === Feature Sections === */
.feature-section { padding: 6rem 0; }

.feature-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 5rem;
  align-items: center;
}

.feature-grid.media-right .feature-media { order: 2; }

.feature-media {
  position: relative;
  aspect-ratio: 1;
  border-radius: var(--radius);
  background: var(--foreground);
  overflow: hidden;
}

.media-placeholder {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  color: rgba(255, 255, 255, 0.2);
  font-size: var(--text-sm);
  font-weight: 500;
}

.media-icon { font-size: var(--text-3xl); }

.media-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(15, 23, 42, 0.8), transparent);
}

.feature-copy {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.feature-copy h2 {
  font-size: var(--text-3xl);
  font-weight: 700;
  letter-spacing: -0.02em;
  line-height: 1.15;
}

.eyebrow {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-xs);
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.15em;
  color: var(--primary);
}

.eyebrow-rule {
  width: 2rem;
  height: 1px;
  background: rgba(37, 99, 235, 0.5);
}

.reveal.media-left .feature-copy { opacity: 0; transform: translateX(2rem); }
.reveal.media-left .feature-media { opacity: 0; transform: translateX(-2rem); transition-delay: 200ms; }
.reveal.media-right .feature-copy { opacity: 0; transform: translateX(-2rem); }
.reveal.media-right .feature-media { opacity: 0; transform: translateX(2rem); transition-delay: 200ms; }
.revealed .feature-copy, .revealed .feature-media { opacity: 1; transform: none; }

/* === Stats === */
.stats-section {
  position: relative;
  padding: 6rem 0;
  overflow: hidden;
}

.stats-backdrop {
  position: absolute;
  inset: 0;
  background: linear-gradient(135deg, rgba(239, 246, 255, 0.8), var(--background), rgba(240, 249, 255, 0.5));
}

.stats-inner { position: relative; }
.stats-inner .section-heading h2 { color: #172554; }

.stats-grid {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 1.5rem;
  align-items: start;
}

.chart-card h3 {
  text-align: center;
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--primary-dark);
  margin-bottom: 2rem;
}

.bar-chart {
  display: flex;
  gap: 1rem;
}

.y-axis {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  height: 13rem;
  font-size: var(--text-xs);
  color: var(--muted-foreground);
  padding-right: 0.5rem;
  border-right: 1px solid #bfdbfe;
  text-align: right;
  font-variant-numeric: tabular-nums;
}

.chart-area { flex: 1; }

.plot {
  position: relative;
  height: 13rem;
  margin-bottom: 0.5rem;
}

.grid-line {
  position: absolute;
  width: 100%;
  border-top: 1px dashed #dbeafe;
}

.bars {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: flex-end;
  justify-content: center;
  gap: 6rem;
  padding: 0 2rem;
}

.bar-slot {
  position: relative;
  height: 13rem;
  width: 7rem;
  display: flex;
  align-items: flex-end;
}

.bar {
  position: relative;
  width: 100%;
  border-radius: 0.5rem 0.5rem 0 0;
  transition: height var(--transition-slow);
}

.bar-traditional { background: linear-gradient(to top, #94a3b8, #cbd5e1); }
.bar-assisted {
  background: linear-gradient(to top, var(--primary), #60a5fa);
  box-shadow: 0 10px 25px rgba(59, 130, 246, 0.3);
  transition-delay: 500ms;
}

.bar-label {
  position: absolute;
  top: -2rem;
  left: 50%;
  transform: translateX(-50%);
  font-size: var(--text-sm);
  font-weight: 700;
  background: var(--card);
  padding: 0.15rem 0.5rem;
  border-radius: 0.25rem;
  border: 1px solid var(--border);
}

.x-axis {
  display: flex;
  justify-content: center;
  gap: 6rem;
  padding: 1rem 2rem 0;
  border-top: 1px solid #bfdbfe;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--muted-foreground);
}

.x-axis span { width: 7rem; text-align: center; }

.axis-caption {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1.5rem;
  font-size: var(--text-xs);
  color: var(--muted-foreground);
}

.footnote {
  margin-top: 1rem;
  text-align: center;
  font-size: var(--text-xs);
  font-style: italic;
  color: var(--muted-foreground);
}

.stat-cards {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.stat-card {
  display: flex;
  gap: 1rem;
  padding: 1.5rem;
}

.stat-card:hover { transform: scale(1.03); }

.stat-accent {
  width: 0.375rem;
  border-radius: var(--radius-full);
  background: linear-gradient(to bottom, var(--primary), #60a5fa);
}

.stat-card:nth-child(2) .stat-accent { background: linear-gradient(to bottom, var(--sky), #38bdf8); }
.stat-card:nth-child(3) .stat-accent { background: linear-gradient(to bottom, var(--indigo), #818cf8); }

.stat-figure {
  display: flex;
  align-items: baseline;
  gap: 0.25rem;
  margin-bottom: 0.5rem;
  color: var(--primary-dark);
  font-weight: 700;
}

.figure { font-size: var(--text-3xl); letter-spacing: -0.02em; }
.figure-unit { font-size: var(--text-xl); }

.stat-heading {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
  color: var(--primary);
}

.stat-heading h4 {
  font-size: var(--text-xs);
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

.stat-card p {
  font-size: var(--text-sm);
  color: var(--muted-foreground);
}

/* === Ecosystem === */
.ecosystem-section {
  padding: 6rem 0;
  background: rgba(241, 245, 249, 0.3);
}

.ecosystem-section .pill { background: var(--background); }

.partner-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2.5rem;
}

.partner-card {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.partner-card h3 {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 1.25rem;
  font-weight: 700;
}

.partner-card p { color: var(--muted-foreground); }

.partner-media {
  position: relative;
  aspect-ratio: 4 / 3;
  border-radius: var(--radius);
  background: var(--foreground);
  overflow: hidden;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  color: rgba(255, 255, 255, 0.2);
  font-size: var(--text-sm);
  transition: box-shadow var(--transition-normal);
}

.partner-card:hover .partner-media { box-shadow: 0 20px 40px rgba(15, 23, 42, 0.2); }

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--border);
  background: rgba(241, 245, 249, 0.2);
  padding: 4rem 0 2rem;
}

.footer-cta {
  position: relative;
  border-radius: var(--radius);
  background: var(--foreground);
  color: var(--background);
  padding: 4rem;
  margin-bottom: 4rem;
  overflow: hidden;
}

.cta-glow {
  position: absolute;
  width: 16rem;
  height: 16rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.05);
  filter: blur(40px);
}

.cta-glow-top { top: -6rem; right: -6rem; }
.cta-glow-bottom { bottom: -6rem; left: -6rem; }

.cta-body {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 2rem;
}

.cta-copy { max-width: 36rem; }

.cta-copy h2 {
  font-size: var(--text-2xl);
  font-weight: 700;
  margin-bottom: 1rem;
  min-height: 2.5em;
}

.cta-copy p { color: rgba(255, 255, 255, 0.7); }

.cta-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.footer-columns {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 2rem;
  margin-bottom: 3rem;
}

.footer-columns h4 {
  font-size: var(--text-sm);
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.08em;
  margin-bottom: 1rem;
}

.footer-brand {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.footer-brand p,
.newsletter p {
  font-size: var(--text-sm);
  color: var(--muted-foreground);
  max-width: 20rem;
}

.social {
  display: flex;
  gap: 0.75rem;
  margin-top: 0.5rem;
}

.social-button { width: 2.25rem; height: 2.25rem; }

.footer-links {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.footer-link {
  font-size: var(--text-sm);
  color: var(--muted-foreground);
  transition: color var(--transition-fast);
}

.footer-link:hover { color: var(--foreground); }
.footer-link.muted:hover { color: var(--muted-foreground); }

.newsletter-form {
  display: flex;
  gap: 0.5rem;
  margin-top: 1rem;
}

.newsletter-form input {
  flex: 1;
  padding: 0.5rem 1rem;
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  font-size: var(--text-sm);
}

.newsletter-form input:focus,
.input-field:focus {
  outline: none;
  box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.3);
}

.confirmation {
  margin-top: 1rem;
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--success) !important;
}

.footer-bottom {
  padding-top: 2rem;
  border-top: 1px solid var(--border);
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
  font-size: var(--text-sm);
  color: var(--muted-foreground);
}

.legal-links {
  display: flex;
  gap: 1.5rem;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(15, 23, 42, 0.6);
  backdrop-filter: blur(4px);
  animation: fade-in 200ms ease;
}

.modal-content {
  position: relative;
  width: min(32rem, calc(100vw - 2rem));
  max-height: 90vh;
  overflow-y: auto;
  background: var(--background);
  border-radius: var(--radius);
  padding: 1.5rem;
  box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25);
  animation: slide-in 200ms ease;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.modal-close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  font-size: var(--text-xl);
  line-height: 1;
  color: var(--muted-foreground);
}

.modal-close-btn:hover { color: var(--foreground); }

.modal-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 0.5rem;
}

.modal-title h2 { font-size: 1.25rem; font-weight: 600; }

.modal-icon {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 0.75rem;
  background: var(--primary-soft);
  color: var(--primary);
  display: flex;
  align-items: center;
  justify-content: center;
}

.modal-description { color: var(--muted-foreground); }

.modal-body {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-top: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 500;
}

.required-mark {
  color: var(--danger);
  margin-left: 0.25rem;
}

.input-field {
  font: inherit;
  font-size: var(--text-sm);
  padding: 0.6rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.5rem;
  background: var(--background);
}

textarea.input-field {
  min-height: 6rem;
  resize: none;
}

.form-error {
  font-size: var(--text-sm);
  color: var(--danger);
  background: #fef2f2;
  border: 1px solid #fecaca;
  border-radius: 0.5rem;
  padding: 0.5rem 0.75rem;
}

.modal-success {
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: 0.5rem;
  padding: 2rem 0;
}

.modal-success h2 { font-size: 1.25rem; }
.modal-success p { color: var(--muted-foreground); margin-bottom: 1rem; }

.success-badge {
  width: 4rem;
  height: 4rem;
  border-radius: 50%;
  background: var(--success-soft);
  color: var(--success);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-xl);
  margin-bottom: 0.5rem;
}

/* === About === */
.etymology-hero {
  position: relative;
  padding: 8rem 0;
  overflow: hidden;
  background: linear-gradient(to bottom, rgba(239, 246, 255, 0.8), rgba(240, 249, 255, 0.4), var(--background));
}

.etymology { text-align: center; }

.etymology.reveal { transform: translateY(3rem); transition-duration: 1000ms; }
.etymology.reveal.revealed { transform: none; }

.sanskrit {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  color: var(--primary);
  margin-bottom: 1rem;
}

.etymology h1 {
  font-size: 5rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: 2rem;
  min-height: 1.2em;
}

.tagline {
  font-size: 1.25rem;
  color: var(--muted-foreground);
  max-width: 48rem;
  margin: 0 auto;
}

.sub-tag {
  margin-top: 2rem;
  font-size: var(--text-sm);
  color: var(--muted-foreground);
}

.about-section { padding: 6rem 0; }
.about-section.tinted { background: linear-gradient(to bottom, rgba(239, 246, 255, 0.3), rgba(241, 245, 249, 0.3)); }

.about-section h2 {
  font-size: var(--text-3xl);
  font-weight: 700;
  color: var(--primary-dark);
  margin-bottom: 1.5rem;
}

.mission-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 5rem;
  align-items: center;
}

.mission-copy .lead { margin-bottom: 1.5rem; }

.mission-chart {
  display: flex;
  justify-content: center;
}

.callout {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  border-radius: 0.75rem;
  background: rgba(239, 246, 255, 0.5);
  border: 1px solid #dbeafe;
  font-size: var(--text-sm);
  font-weight: 500;
  font-style: italic;
}

.callout-icon,
.science-icon,
.value-icon,
.leader-avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  background: #eff6ff;
  color: var(--primary);
  flex-shrink: 0;
}

.callout-icon { width: 2.5rem; height: 2.5rem; border-radius: 0.5rem; }

.donut {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.donut-ring { transform: rotate(-90deg); }

.donut-arc { transition: stroke-dasharray var(--transition-slow); }

.donut-legend {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
  margin-top: 1.5rem;
}

.legend-item {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--muted-foreground);
}

.legend-swatch {
  width: 1rem;
  height: 1rem;
  border-radius: 0.2rem;
}

.chart-caption {
  margin-top: 1rem;
  font-size: var(--text-sm);
  color: var(--muted-foreground);
  text-align: center;
}

.leader-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem;
  max-width: 56rem;
  margin: 0 auto;
}

.leader-card {
  display: flex;
  align-items: flex-start;
  gap: 1.5rem;
  padding: 2rem;
  border-radius: var(--radius);
  background: var(--card);
  border: 1px solid var(--border);
}

.leader-card:hover { transform: scale(1.02); box-shadow: 0 20px 40px rgba(37, 99, 235, 0.1); }

.leader-card.highlighted {
  background: var(--primary-dark);
  border-color: var(--primary-dark);
  color: #ffffff;
}

.leader-avatar { width: 5rem; height: 5rem; border-radius: var(--radius); font-size: var(--text-2xl); }
.leader-card.highlighted .leader-avatar { background: rgba(255, 255, 255, 0.1); color: rgba(255, 255, 255, 0.8); }

.leader-card h3 { font-size: 1.25rem; margin-bottom: 0.25rem; }
.leader-role { font-size: var(--text-sm); font-weight: 500; color: var(--primary); margin-bottom: 0.75rem; }
.leader-card.highlighted .leader-role { color: #93c5fd; }
.leader-bio { font-size: var(--text-sm); color: var(--muted-foreground); }
.leader-card.highlighted .leader-bio { color: rgba(255, 255, 255, 0.7); }

.values-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 2rem;
  max-width: 64rem;
}

.values-grid.reveal { opacity: 1; transform: none; }

.core-value { text-align: center; }

.value-icon {
  width: 4rem;
  height: 4rem;
  border-radius: 50%;
  border: 1px solid #dbeafe;
  margin: 0 auto 1.5rem;
  font-size: var(--text-xl);
  transition: transform var(--transition-fast);
}

.core-value:hover .value-icon { transform: scale(1.1); }
.core-value h3 { font-size: 1.25rem; margin-bottom: 0.75rem; }
.core-value p { font-size: var(--text-sm); color: var(--muted-foreground); }

.science-card {
  display: flex;
  align-items: flex-start;
  gap: 1.5rem;
  padding: 3rem;
}

.science-icon { width: 3.5rem; height: 3.5rem; border-radius: 0.75rem; border: 1px solid #dbeafe; }

.science-card h3 {
  font-size: var(--text-2xl);
  color: var(--primary-dark);
  margin-bottom: 1rem;
}

.principles {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
  margin-top: 1.5rem;
}

.principle {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  padding: 1rem;
  border-radius: 0.75rem;
  background: rgba(239, 246, 255, 0.5);
  border: 1px solid rgba(219, 234, 254, 0.5);
  font-size: var(--text-sm);
}

/* === Responsive === */
@media (max-width: 1024px) {
  .hero-grid,
  .feature-grid,
  .stats-grid,
  .mission-grid {
    grid-template-columns: 1fr;
    gap: 3rem;
  }

  .feature-grid.media-right .feature-media { order: 0; }
  .footer-columns { grid-template-columns: 1fr 1fr; }
  .cta-body { flex-direction: column; align-items: flex-start; }
  .etymology h1 { font-size: var(--text-3xl); }
}

@media (max-width: 768px) {
  .partner-grid,
  .leader-grid,
  .values-grid,
  .principles,
  .footer-columns {
    grid-template-columns: 1fr;
  }

  .hero-title { font-size: var(--text-2xl); }
  .footer-cta { padding: 2rem; }
  .footer-bottom { flex-direction: column; }
}
"#;
