pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Layout helpers */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.page-content {
  padding-top: var(--header-height);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  font-size: 1rem;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:focus-visible {
  box-shadow: 0 0 0 3px rgba(20, 184, 166, 0.3);
}

.btn:active {
  transform: translateY(1px);
}

.btn:hover {
  text-decoration: none;
}

.btn-primary {
  background-image: var(--gradient-brand);
  color: var(--text-inverse);
}

.btn-primary:hover {
  filter: brightness(1.08);
}

.btn-outline {
  background-color: transparent;
  color: var(--primary);
  border: 1px solid var(--border);
}

.btn-outline:hover {
  border-color: var(--primary);
  background-color: rgba(20, 184, 166, 0.08);
}

.btn-icon {
  background-color: transparent;
  color: var(--text-secondary);
  padding: var(--space-2);
  border-radius: var(--radius-full);
}

.btn-icon:hover {
  background-color: var(--surface-muted);
  color: var(--text-primary);
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

.btn-block {
  width: 100%;
}

/* Badges */
.badge {
  display: inline-flex;
  align-items: center;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.875rem;
  font-weight: 500;
}

.badge-accent {
  background-color: rgba(20, 184, 166, 0.1);
  color: var(--primary);
}

.badge-period {
  background-color: rgba(99, 102, 241, 0.1);
  color: var(--accent);
}

.badge-muted {
  background-color: var(--surface-muted);
  color: var(--text-secondary);
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-sm);
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.card:hover {
  box-shadow: var(--shadow-lg);
}

/* Icons scale with their container */
.icon {
  width: 1.25em;
  height: 1.25em;
  flex-shrink: 0;
}

/* Forms */
.form-field {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.form-field label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input {
  width: 100%;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-primary);
  font-size: 1rem;
  font-family: inherit;
}

.form-input:focus {
  outline: none;
  border-color: var(--border-focus);
  box-shadow: 0 0 0 2px rgba(20, 184, 166, 0.3);
}

/* Fixed header */
.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background-color: var(--header-backdrop);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.logo-text {
  font-weight: 600;
  font-size: 1.25rem;
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  gap: var(--space-1);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--surface-muted);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary);
  background-color: var(--surface-muted);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.menu-button {
  display: none;
}

/* Mobile menu overlay, below the fixed header */
.mobile-menu {
  position: fixed;
  inset: 0;
  z-index: 40;
  background-color: var(--overlay);
  padding-top: var(--header-height);
  animation: menu-in var(--transition-normal) var(--easing-standard);
}

.mobile-menu-links {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  padding: var(--space-8) var(--space-4);
}

.mobile-menu-link {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  color: var(--text-primary);
  font-weight: 500;
}

.mobile-menu-link:hover {
  text-decoration: none;
  border-color: var(--primary);
}

@keyframes menu-in {
  from {
    opacity: 0;
    transform: translateY(-20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .menu-button {
    display: inline-flex;
  }

  .contact-cta {
    display: none;
  }
}
"#;
