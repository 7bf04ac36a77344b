//! Global CSS styles for the portfolio showcase.
//!
//! Frosted glass panels on a deep navy background with cyan accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BACKGROUND */
  --navy: #0b1020;
  --navy-deep: #070a14;

  /* ACCENTS */
  --cyan: #00eaff;
  --cyan-soft: rgba(0, 234, 255, 0.1);
  --cyan-border: rgba(0, 234, 255, 0.3);
  --sky: #7ecbff;
  --link: #00bfff;

  /* FROST */
  --frost: rgba(255, 255, 255, 0.06);
  --frost-strong: rgba(255, 255, 255, 0.12);
  --frost-border: rgba(255, 255, 255, 0.1);
  --blur: blur(14px);

  /* TEXT */
  --text-primary: #f3f6ff;
  --text-secondary: #b6b6d6;

  --radius: 14px;
  --transition: 250ms ease;
  --font: 'Inter', 'Segoe UI', system-ui, sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: radial-gradient(ellipse at top, #16203a 0%, var(--navy) 45%, var(--navy-deep) 100%);
  color: var(--text-primary);
  font-family: var(--font);
  line-height: 1.6;
  min-height: 100vh;
}

a { color: var(--link); text-decoration: none; }

button { font: inherit; color: inherit; background: none; border: none; cursor: pointer; }
button:disabled { opacity: 0.35; cursor: default; }

:focus-visible { outline: 2px solid var(--cyan); outline-offset: 3px; }

/* === Decorative Background === */
.dots-bg {
  position: fixed;
  inset: 0;
  width: 100vw;
  height: 100vh;
  pointer-events: none;
  z-index: 0;
}

.main-content {
  position: relative;
  z-index: 1;
  max-width: 1200px;
  margin: 0 auto;
  padding: 6rem 1.5rem 4rem;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0; left: 0; right: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.9rem 2rem;
}

.navbar-glass {
  background: rgba(11, 16, 32, 0.6);
  backdrop-filter: var(--blur);
  border-bottom: 1px solid var(--frost-border);
}

.navbar-title {
  font-size: 1.25rem;
  font-weight: 700;
  cursor: pointer;
  display: flex;
  flex-direction: column;
  line-height: 1.2;
}

.navbar-role { font-size: 0.8rem; font-weight: 400; color: var(--text-secondary); }

.navbar-right { display: flex; align-items: center; gap: 0.75rem; }

.nav-icon-link {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  color: var(--text-primary);
}

.icon-frosted-wrapper {
  display: grid;
  place-items: center;
  width: 36px;
  height: 36px;
  border-radius: 10px;
  background: var(--frost);
  border: 1px solid var(--frost-border);
  transition: background var(--transition);
}

.nav-icon-link:hover .icon-frosted-wrapper { background: var(--frost-strong); }

.nav-link-text { display: none; }

.nav-resume-btn {
  padding: 0.45rem 1rem;
  border-radius: 10px;
  background: var(--cyan-soft);
  border: 1px solid var(--cyan-border);
  color: var(--cyan);
}

.resume-icon { margin-right: 0.4em; }

.mobile-menu-toggle { display: none; font-size: 1.4rem; }
.mobile-menu-header { display: none; }

/* === About === */
.about-section { margin-bottom: 3rem; }

.about-glass {
  background: var(--frost);
  backdrop-filter: var(--blur);
  border: 1px solid var(--frost-border);
  border-radius: var(--radius);
  padding: 2rem;
}

.about-glass-row { display: flex; gap: 2.5rem; align-items: center; }

.about-left { display: flex; flex-direction: column; align-items: center; gap: 1rem; min-width: 220px; }

.about-avatar {
  width: 160px;
  height: 160px;
  border-radius: 50%;
  object-fit: cover;
  border: 2px solid var(--cyan-border);
}

.about-spacer-line { width: 60px; height: 2px; background: var(--cyan-border); }

.about-interests { display: flex; flex-wrap: wrap; gap: 0.4rem; justify-content: center; }

.about-name-glow {
  font-size: 2rem;
  margin-bottom: 0.75rem;
  text-shadow: 0 0 18px rgba(0, 234, 255, 0.35);
}

.about-content p { color: var(--text-secondary); }

/* === Tabs === */
.projects-heading { font-size: 1.8rem; margin-bottom: 1rem; }

.tabs { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; flex-wrap: wrap; }

.tabs button {
  padding: 0.5rem 1.2rem;
  border-radius: 999px;
  background: var(--frost);
  border: 1px solid var(--frost-border);
  color: var(--text-secondary);
  transition: all var(--transition);
}

.tabs button.active {
  background: var(--cyan-soft);
  border-color: var(--cyan-border);
  color: var(--cyan);
}

.tab-text-mobile { display: none; }

/* === Card Grids === */
.card-grid, .modeling-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1.5rem;
}

.scene-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }

.card {
  position: relative;
  display: flex;
  flex-direction: column;
  background: var(--frost);
  backdrop-filter: var(--blur);
  border: 1px solid var(--frost-border);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition), border-color var(--transition);
}

.card:hover, .card:focus-visible { transform: translateY(-4px); border-color: var(--cyan-border); }

.card-media { position: relative; aspect-ratio: 16 / 9; overflow: hidden; }
.scene-media { aspect-ratio: 21 / 9; }

.card-image, .detail-image, .feature-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: opacity 400ms ease;
}

.card-badge {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 8px;
  font-size: 0.75rem;
  background: rgba(7, 10, 20, 0.7);
}

.card-body { padding: 1rem 1.2rem 0.5rem; }
.card-title { font-size: 1.2rem; margin-bottom: 0.3rem; }
.card-summary { color: var(--text-secondary); font-size: 0.92rem; }

.card-footer, .modeling-tags-container {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  padding: 0.5rem 1.2rem 1.2rem;
}

.tag, .modeling-tag {
  padding: 0.15rem 0.65rem;
  border-radius: 999px;
  font-size: 0.78rem;
  background: var(--cyan-soft);
  border: 1px solid var(--cyan-border);
  color: var(--cyan);
}

.modeling-card-meta, .scene-meta { display: flex; gap: 0.5rem; flex-wrap: wrap; }

.meta-chip {
  font-size: 0.8rem;
  color: var(--text-secondary);
  padding: 0.1rem 0.5rem;
  border-radius: 6px;
  background: var(--frost);
}

.icon-btn {
  display: grid;
  place-items: center;
  width: 38px;
  height: 38px;
  border-radius: 10px;
  background: rgba(7, 10, 20, 0.6);
  border: 1px solid var(--frost-border);
}

.card-preview-btn { position: absolute; bottom: 0.75rem; right: 0.75rem; }

.scene-overlay {
  position: absolute;
  inset: auto 0 0 0;
  padding: 1.5rem;
  background: linear-gradient(transparent, rgba(7, 10, 20, 0.9));
}

.skeleton-loader {
  position: absolute;
  inset: 0;
  background: linear-gradient(90deg, var(--frost) 25%, var(--frost-strong) 50%, var(--frost) 75%);
  background-size: 200% 100%;
  animation: shimmer 1.4s infinite;
}

@keyframes shimmer {
  from { background-position: 200% 0; }
  to { background-position: -200% 0; }
}

/* === Buttons === */
.back-btn, .error-refresh-btn {
  padding: 0.5rem 1.2rem;
  border-radius: 10px;
  background: var(--frost);
  border: 1px solid var(--frost-border);
  transition: background var(--transition);
}

.back-btn:hover, .error-refresh-btn:hover { background: var(--frost-strong); }

.back-btn { margin-bottom: 1.25rem; }

/* === Detail Views === */
.detail-card {
  background: var(--frost);
  backdrop-filter: var(--blur);
  border: 1px solid var(--frost-border);
  border-radius: var(--radius);
  padding: 2rem;
  text-align: center;
}

.detail-title { font-size: 2.2rem; margin-bottom: 0.5rem; }
.detail-summary { color: var(--text-secondary); max-width: 760px; margin: 0 auto; }

.modeling-meta-info {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 1rem;
  margin: 1.5rem 0 1rem;
}

.modeling-meta-item {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 0.6rem 1rem;
  border-radius: 10px;
  background: var(--frost);
  min-width: 120px;
}

.meta-row { display: flex; gap: 0.35rem; align-items: center; }
.meta-label { color: var(--text-secondary); font-size: 0.85rem; }
.meta-value { font-weight: 600; }

.academic-badge {
  display: inline-flex;
  gap: 0.4rem;
  padding: 8px 16px;
  margin-bottom: 1.5em;
  border-radius: 8px;
  font-size: 0.9rem;
  background: var(--cyan-soft);
  border: 1px solid var(--cyan-border);
  color: var(--cyan);
}

.detail-tags { justify-content: center; margin-bottom: 2em; }

.detail-images, .modeling-gallery, .scene-gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1rem;
  margin: 1rem 0 2rem;
}

.detail-image-item {
  position: relative;
  aspect-ratio: 16 / 9;
  border-radius: 10px;
  overflow: hidden;
  cursor: zoom-in;
}

.detail-body { color: var(--text-secondary); text-align: left; margin: 2rem 0; white-space: pre-line; }

.section-header { margin: 2.5rem 0 1rem; }
.section-title { font-size: 1.5rem; }

.section-divider {
  width: 80px;
  height: 2px;
  margin: 0.5rem auto;
  background: var(--frost-strong);
}

.section-divider-special { background: linear-gradient(90deg, transparent, var(--cyan), transparent); }
.section-description { color: var(--text-secondary); font-size: 0.92rem; }

.video-frame {
  max-width: 900px;
  margin: 0 auto;
  padding: 20px;
  border-radius: 12px;
  background: rgba(0, 0, 0, 0.3);
}

.video-wrapper {
  position: relative;
  width: 100%;
  padding-top: 56.25%;
  border-radius: 8px;
  overflow: hidden;
}

.video-wrapper iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: none; }

.mechanics-list-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
  text-align: left;
}

.mechanic-item { padding: 1rem; border-radius: 10px; background: var(--frost); }
.mechanic-icon { font-size: 1.5rem; }
.mechanic-desc { color: var(--text-secondary); font-size: 0.9rem; }

.team-credit {
  margin-top: 3em;
  padding: 1.5em;
  text-align: left;
  border-radius: 12px;
  background: rgba(255, 255, 255, 0.03);
  border: 1px solid var(--frost-border);
}

.team-credit-title { display: flex; gap: 0.5em; color: var(--cyan); margin-bottom: 0.8em; }
.team-credit-text { color: var(--text-secondary); }

.features-grid { display: grid; gap: 1.5rem; text-align: left; }

.feature-item {
  display: grid;
  grid-template-columns: minmax(220px, 2fr) 3fr;
  gap: 1.25rem;
  align-items: center;
  padding: 1rem;
  border-radius: 12px;
  background: var(--frost);
}

.feature-image-btn { position: relative; aspect-ratio: 16 / 9; border-radius: 10px; overflow: hidden; cursor: zoom-in; }
.feature-title { display: flex; gap: 0.4rem; margin-bottom: 0.4rem; }
.feature-desc { color: var(--text-secondary); }

/* === Image Modal === */
.image-modal {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  background: rgba(4, 6, 12, 0.92);
  backdrop-filter: blur(6px);
  outline: none;
}

.modal-image-wrapper { position: relative; max-width: 85vw; max-height: 85vh; }

.modal-image-container { position: relative; display: grid; place-items: center; overflow: hidden; }
.modal-image-container.zoomed { overflow: auto; max-height: 85vh; }

.modal-image {
  max-width: 85vw;
  max-height: 85vh;
  border-radius: 10px;
  transition: opacity 300ms ease, transform 300ms ease;
}

.modal-image.zoomed { max-width: none; max-height: none; transform: scale(1.6); transform-origin: center; }

.modal-image-loader { position: absolute; inset: 0; display: grid; place-items: center; }

.spinner {
  width: 42px;
  height: 42px;
  border-radius: 50%;
  border: 3px solid var(--frost-strong);
  border-top-color: var(--cyan);
  animation: spin 0.9s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.modal-nav-btn, .modal-close-btn {
  display: grid;
  place-items: center;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  background: var(--frost);
  border: 1px solid var(--frost-border);
}

.modal-close-btn { position: absolute; top: -56px; right: 0; z-index: 2; }

.modal-indicator {
  position: absolute;
  bottom: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  padding: 0.25rem 0.9rem;
  border-radius: 999px;
  background: var(--frost);
  font-size: 0.9rem;
}

/* === Error Fallback === */
.error-fallback { min-height: 100vh; display: grid; place-items: center; padding: 2rem; }

.error-content {
  max-width: 520px;
  text-align: center;
  padding: 2.5rem;
  border-radius: var(--radius);
  background: var(--frost);
  border: 1px solid var(--frost-border);
}

.error-content h1 { margin-bottom: 1rem; }
.error-content p { color: var(--text-secondary); margin-bottom: 1.5rem; }
.error-details { margin-top: 2rem; text-align: left; }
.error-details pre { font-size: 0.875rem; overflow: auto; }

/* === Mobile === */
@media (max-width: 768px) {
  .navbar { padding: 0.75rem 1rem; }

  .mobile-menu-toggle { display: block; z-index: 60; }

  .navbar-right {
    position: fixed;
    top: 0; right: 0; bottom: 0;
    width: 75vw;
    flex-direction: column;
    align-items: flex-start;
    padding: 5rem 1.5rem 2rem;
    background: rgba(11, 16, 32, 0.96);
    transform: translateX(100%);
    transition: transform var(--transition);
  }

  .navbar-right.mobile-menu-open { transform: translateX(0); }
  .mobile-menu-header { display: block; margin-bottom: 1rem; }
  .nav-link-text { display: inline; }

  .about-glass-row { flex-direction: column; }
  .tab-text-full { display: none; }
  .tab-text-mobile { display: inline; }

  .card-grid, .modeling-grid { grid-template-columns: 1fr; }
  .mechanics-list-grid { grid-template-columns: 1fr; }
  .feature-item { grid-template-columns: 1fr; }
  .detail-card { padding: 1.25rem; }

  .modal-nav-btn { position: absolute; bottom: 1.25rem; }
  .modal-prev-btn { left: 1.25rem; }
  .modal-next-btn { right: 1.25rem; }
  .modal-image, .modal-image-wrapper { max-width: 96vw; }
}
"#;
