pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-lg);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  text-decoration: none;
}

.btn-primary {
  background-color: var(--primary-dark);
  color: white;
  border: 1px solid var(--primary-dark);
}

/* Cards, one modifier per theme */
.card {
  border-radius: var(--radius-xl);
  border: 1px solid;
  padding: var(--space-6);
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.card-dark {
  background-color: var(--neutral-900);
  border-color: var(--neutral-800);
  color: var(--neutral-300);
}

.card-light {
  background-color: white;
  border-color: var(--neutral-200);
  color: var(--neutral-700);
}

/* Theme toggle */
.theme-toggle {
  margin-left: var(--space-4);
  padding: var(--space-1) var(--space-3);
  border: 1px solid currentColor;
  border-radius: var(--radius-md);
  background: transparent;
  color: inherit;
  font-size: 0.75rem;
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.theme-toggle:hover {
  transform: scale(1.05);
}

/* Floating contact */
.floating-contact {
  position: fixed;
  bottom: var(--space-6);
  right: var(--space-6);
  z-index: 50;
  padding: var(--space-3) var(--space-5);
  border-radius: var(--radius-full);
  background-color: var(--secondary);
  color: white;
  box-shadow: var(--shadow-lg);
}

.floating-contact:hover {
  background-color: var(--secondary-dark);
  text-decoration: none;
}
"#;
