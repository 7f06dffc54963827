pub const SECTION_STYLES: &str = r#"
/* Page Section Styles */

.section {
  padding: var(--space-20) 0;
}

.section-intro {
  max-width: 48rem;
  margin: 0 auto var(--space-16);
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-4);
}

.section-title {
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--text-primary);
}

.section-subtitle {
  color: var(--text-secondary);
}

.section-more {
  text-align: center;
  margin-top: var(--space-12);
}

.gradient-text {
  background-image: var(--gradient-brand);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

@keyframes fade-up {
  from {
    opacity: 0;
    transform: translateY(20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

/* Hero Section */
.hero-section {
  min-height: 100vh;
  display: flex;
  align-items: center;
}

.hero-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: center;
}

.hero-copy {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: var(--space-4);
  animation: fade-up var(--transition-slow) var(--easing-standard);
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
  line-height: 1.1;
  color: var(--text-primary);
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  line-height: 1.6;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  margin-top: var(--space-4);
}

.hero-social {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-10);
}

.social-link {
  display: inline-flex;
  padding: var(--space-2);
  border-radius: var(--radius-full);
  background-color: var(--surface-muted);
  color: var(--text-secondary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.social-link:hover {
  color: var(--primary);
}

.hero-portrait {
  position: relative;
  display: flex;
  justify-content: center;
  animation: fade-up var(--transition-slow) var(--easing-standard);
}

.portrait-glow {
  position: absolute;
  inset: -16px;
  border-radius: var(--radius-full);
  background-image: var(--gradient-brand);
  filter: blur(64px);
  opacity: 0.2;
}

.portrait-frame {
  position: relative;
  z-index: 1;
  width: 20rem;
  height: 20rem;
  border-radius: var(--radius-full);
  border: 2px solid var(--border);
  overflow: hidden;
}

.portrait-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* About Section */
.about-section {
  background-color: var(--surface-muted);
}

.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: start;
}

.about-heading {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--text-primary);
  margin-bottom: var(--space-4);
}

.about-paragraph {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

.stats-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
  margin-top: var(--space-8);
}

.stat-card {
  padding: var(--space-4);
}

.stat-value {
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--primary);
  margin-bottom: var(--space-1);
}

.stat-label {
  color: var(--text-secondary);
}

.skill-tabs {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-1);
  margin-bottom: var(--space-6);
  background-color: rgba(20, 184, 166, 0.08);
  border-radius: var(--radius-lg);
  padding: var(--space-1);
}

.skill-tab {
  padding: var(--space-2) var(--space-3);
  border: none;
  border-radius: var(--radius-md);
  background-color: transparent;
  color: var(--text-secondary);
  font-weight: 500;
  cursor: pointer;
}

.skill-tab.active {
  background-color: var(--surface);
  color: var(--primary);
  box-shadow: var(--shadow-sm);
}

.skills-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-3);
}

.skill-chip {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-3);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  border: 1px solid var(--border);
}

.skill-dot {
  width: 8px;
  height: 8px;
  border-radius: var(--radius-full);
  background-image: var(--gradient-brand);
}

/* Projects Section */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-8);
}

.project-card {
  overflow: hidden;
  display: flex;
  flex-direction: column;
}

.project-media {
  position: relative;
}

.project-image {
  width: 100%;
  height: 12rem;
  object-fit: cover;
  display: block;
}

.project-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: flex-end;
  gap: var(--space-3);
  padding: var(--space-4);
  background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
  opacity: 0;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.project-media:hover .project-overlay {
  opacity: 1;
}

.project-overlay-link {
  display: inline-flex;
  padding: var(--space-2);
  border-radius: var(--radius-full);
  background-color: rgba(255, 255, 255, 0.2);
  color: var(--text-inverse);
  backdrop-filter: blur(4px);
}

.project-body {
  padding: var(--space-6);
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.project-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-primary);
}

.project-desc {
  color: var(--text-secondary);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

/* Education Section */
.education-section {
  background-color: var(--surface-muted);
}

.timeline {
  max-width: 56rem;
  margin: 0 auto;
}

.timeline-row {
  display: flex;
  gap: var(--space-6);
  margin-bottom: var(--space-12);
}

.timeline-row:last-child {
  margin-bottom: 0;
}

.timeline-marker {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.timeline-node {
  width: 48px;
  height: 48px;
  border-radius: var(--radius-full);
  background-color: var(--surface);
  border: 1px solid var(--border);
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: var(--shadow-sm);
}

.timeline-dot {
  width: 12px;
  height: 12px;
  border-radius: var(--radius-full);
  background-image: var(--gradient-brand);
}

.timeline-rule {
  width: 2px;
  flex: 1;
  margin-top: var(--space-2);
  background-color: var(--border);
}

.timeline-card {
  flex: 1;
  padding: var(--space-6);
}

.timeline-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-primary);
  margin-top: var(--space-2);
}

.timeline-institution {
  color: var(--text-tertiary);
  margin-bottom: var(--space-4);
}

.timeline-desc {
  color: var(--text-secondary);
}

/* Contact Section */
.contact-card {
  max-width: 64rem;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 2fr 3fr;
  overflow: hidden;
}

.contact-info {
  background-image: var(--gradient-brand);
  color: var(--text-inverse);
  padding: var(--space-8);
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.contact-heading {
  font-size: 1.5rem;
  font-weight: 600;
}

.contact-blurb {
  opacity: 0.9;
  margin-bottom: var(--space-4);
}

.contact-channels {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.contact-channels li {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.contact-form {
  padding: var(--space-8);
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-6);
}

/* Footer */
.page-footer {
  padding: var(--space-8) 0;
  border-top: 1px solid var(--border);
}

.footer-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
}

.footer-copyright {
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

.footer-social {
  display: flex;
  gap: var(--space-4);
}

/* Responsive Adjustments */
@media (max-width: 1024px) {
  .projects-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 768px) {
  .hero-grid,
  .about-grid,
  .contact-card {
    grid-template-columns: 1fr;
  }

  .hero-portrait {
    order: -1;
  }

  .hero-title {
    font-size: 2.5rem;
  }

  .projects-grid,
  .form-row,
  .skills-grid {
    grid-template-columns: 1fr;
  }

  .portrait-frame {
    width: 16rem;
    height: 16rem;
  }

  .footer-inner {
    flex-direction: column;
  }
}
"#;
