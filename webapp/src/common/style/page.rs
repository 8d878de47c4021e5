pub const PAGE_STYLES: &str = r#"
/* Profile Page Styles */

.page {
  min-height: 100vh;
  padding: 0 var(--space-6);
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.page-dark {
  background-color: black;
  color: white;
}

.page-light {
  background-color: var(--neutral-100);
  color: var(--neutral-900);
}

/* Header */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  backdrop-filter: blur(8px);
  border-bottom: 1px solid;
}

.site-header-dark {
  background-color: rgba(0, 0, 0, 0.8);
  border-color: var(--neutral-800);
}

.site-header-light {
  background-color: rgba(255, 255, 255, 0.8);
  border-color: var(--neutral-200);
}

.site-title {
  font-weight: 600;
  color: inherit;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  font-size: 0.875rem;
}

.nav-link {
  position: relative;
  padding-bottom: var(--space-1);
  color: inherit;
  opacity: 0.7;
  transition: opacity var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  opacity: 1;
  text-decoration: none;
}

.nav-link.active {
  opacity: 1;
  font-weight: 600;
}

.nav-link.active::after {
  content: "";
  position: absolute;
  left: 0;
  bottom: 0;
  height: 2px;
  width: 100%;
  background-color: var(--primary);
}

/* Sections */
.page-section {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: var(--space-16) 0;
}

.page-section:first-of-type {
  padding-top: var(--space-32);
}

.section-title {
  font-size: 1.875rem;
  font-weight: 600;
  margin-bottom: var(--space-6);
}

.profile-name {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-3);
}

.profile-headline {
  font-size: 1.25rem;
  color: var(--primary);
  margin-bottom: var(--space-5);
}

.card p + p {
  margin-top: var(--space-3);
}

.strength-list > * + * {
  margin-top: var(--space-4);
}

.tech-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-4);
}

@media (min-width: 768px) {
  .tech-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

.tech-card {
  font-size: 0.875rem;
  padding: var(--space-4);
}

.tech-card h4,
.role h4 {
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.role + .role {
  margin-top: var(--space-6);
}

.role-period {
  font-size: 0.875rem;
  opacity: 0.7;
  margin-bottom: var(--space-2);
}

.role ul {
  list-style: disc inside;
  font-size: 0.875rem;
}

.contact-links {
  display: flex;
  gap: var(--space-4);
}

.site-error {
  max-width: var(--content-width);
  margin: var(--space-16) auto;
  padding: var(--space-6);
  border: 1px solid #EF4444;
  border-radius: var(--radius-xl);
  color: #EF4444;
  white-space: pre-wrap;
}
"#;
