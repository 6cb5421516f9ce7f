//! Global CSS styles for Card Vault.
//!
//! Colors are referenced through CSS variables so a theme or accent change
//! only swaps the `:root` block.

pub const GLOBAL_STYLES: &str = r#"
/* === Static Custom Properties === */
:root {
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.5rem;

  --radius: 12px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--background-color);
  color: var(--text-color);
  line-height: 1.6;
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

button {
  font-family: inherit;
}

/* === Layout === */
.app-shell {
  min-height: 100vh;
  background: var(--background-color);
  color: var(--text-color);
}

.page-container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 6rem 1.5rem 3rem;
}

.page-header {
  margin-bottom: 2.5rem;
  text-align: center;
}

.page-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  color: var(--accent-color);
  text-shadow: 0 0 30px var(--accent-glow);
  margin-bottom: 1rem;
}

.page-subtitle {
  color: var(--text-secondary);
  max-width: 40rem;
  margin: 0 auto;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.5rem;
}

/* === Navigation Header === */
.nav-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: var(--surface-color);
  border-bottom: 1px solid var(--border-color);
  backdrop-filter: blur(12px);
}

.nav-header-inner {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.app-title {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--accent-color);
  text-decoration: none;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  font-size: var(--text-sm);
  font-weight: 500;
  padding: 0.25rem 0.5rem;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-color);
}

.nav-link.active {
  color: var(--accent-color);
  border-bottom-color: var(--accent-color);
}

.user-switcher {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.user-switcher select {
  background: var(--background-color);
  color: var(--text-color);
  border: 1px solid var(--border-color);
  border-radius: 8px;
  padding: 0.25rem 0.5rem;
}

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-ghost {
  border-radius: 8px;
  padding: 0.5rem 1rem;
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--accent-color);
  color: #ffffff;
  border: 1px solid var(--accent-color);
}

.btn-primary:hover {
  box-shadow: 0 0 16px var(--accent-glow);
  transform: translateY(-1px);
}

.btn-secondary {
  background: var(--accent-glow);
  color: var(--text-color);
  border: 1px solid var(--border-color);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
  border: 1px solid transparent;
}

.btn-ghost:hover {
  color: var(--text-color);
}

.btn-primary:disabled,
.btn-secondary:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-full {
  width: 100%;
}

.btn-sm {
  padding: 0.35rem 0.5rem;
  font-size: var(--text-xs);
}

/* === Cards === */
.card-tile {
  position: relative;
  background: var(--surface-color);
  border: 2px solid var(--rarity-color);
  border-radius: var(--radius);
  overflow: hidden;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.card-tile.clickable {
  cursor: pointer;
}

.card-tile:hover {
  transform: translateY(-4px) scale(1.02);
}

.card-tile.legendary {
  box-shadow: 0 0 24px rgba(250, 204, 21, 0.35);
}

.card-image {
  aspect-ratio: 1 / 1;
  overflow: hidden;
}

.card-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 500ms ease;
}

.card-image img:hover {
  transform: scale(1.1);
}

.card-body {
  padding: 1rem;
}

.card-heading {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
}

.card-name {
  font-size: var(--text-lg);
  font-weight: 700;
}

.card-rarity {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--rarity-color);
}

.card-description {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
  margin-bottom: 1rem;
}

.favorite-btn {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 50%;
  border: none;
  background: rgba(0, 0, 0, 0.5);
  color: #ffffff;
  font-size: 1.1rem;
  cursor: pointer;
}

.card-actions {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.5rem;
}

/* === Details === */
.card-details {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2.5rem;
  max-width: 56rem;
  margin: 0 auto;
}

.details-image {
  border: 2px solid var(--rarity-color);
  border-radius: var(--radius);
  overflow: hidden;
}

.details-image img {
  width: 100%;
  display: block;
}

.rarity-pill {
  display: inline-block;
  background: var(--accent-glow);
  color: var(--rarity-color);
  border-radius: 999px;
  padding: 0.25rem 0.75rem;
  font-size: var(--text-sm);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.detail-row {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-sm);
  margin-bottom: 0.5rem;
}

.detail-row .value {
  font-weight: 700;
}

/* === Empty & Loading States === */
.empty-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 5rem 0;
}

.empty-box {
  background: var(--surface-color);
  border-radius: var(--radius);
  padding: 1.5rem;
  text-align: center;
  max-width: 28rem;
}

.empty-box h3 {
  font-size: var(--text-xl);
  margin-bottom: 0.5rem;
}

.empty-box p,
.muted {
  color: var(--text-secondary);
}

.loading-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 5rem 0;
  color: var(--text-secondary);
}

.spinner {
  width: 50px;
  height: 50px;
  border-radius: 50%;
  border: 4px solid var(--accent-glow);
  border-top-color: var(--accent-color);
  animation: spin 1.5s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 60;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(4px);
}

.modal {
  width: 100%;
  max-width: 28rem;
  background: var(--surface-color);
  border: 1px solid var(--border-color);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.modal.details-modal {
  max-width: 56rem;
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
}

.modal-title {
  font-size: var(--text-xl);
  font-weight: 600;
}

.modal-close {
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.25rem;
  cursor: pointer;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.modal-message {
  color: var(--text-secondary);
}

.user-option {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem;
  border-radius: 8px;
  cursor: pointer;
}

.user-option:hover {
  background: var(--accent-glow);
}

.avatar {
  border-radius: 50%;
  object-fit: cover;
  background: var(--border-color);
}

.avatar.sm {
  width: 2.5rem;
  height: 2.5rem;
}

.avatar.lg {
  width: 8rem;
  height: 8rem;
  border: 4px solid var(--accent-glow);
}

.form-label {
  display: block;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  margin-bottom: 0.25rem;
}

.form-input {
  width: 100%;
  padding: 0.5rem 0.75rem;
  background: var(--background-color);
  color: var(--text-color);
  border: 1px solid var(--border-color);
  border-radius: 8px;
}

.form-input:focus {
  outline: 2px solid var(--accent-color);
}

.error-text {
  color: #f87171;
  font-size: var(--text-sm);
  margin-top: 0.5rem;
}

/* === Profile === */
.profile-hero {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  background: var(--surface-color);
  border-radius: var(--radius);
  padding: 1.5rem;
  margin-bottom: 2rem;
}

.profile-name {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.vote-buttons {
  display: flex;
  gap: 1rem;
  margin-top: 1rem;
}

.vote-btn {
  display: flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.35rem 0.75rem;
  border-radius: 999px;
  border: 1px solid var(--border-color);
  background: var(--background-color);
  color: var(--text-secondary);
  cursor: pointer;
}

.tabs {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.5rem;
  margin-bottom: 2rem;
}

.tab {
  padding: 0.5rem;
  border-radius: 8px;
  border: 1px solid var(--border-color);
  background: transparent;
  color: var(--text-secondary);
  cursor: pointer;
}

.tab.active {
  background: var(--accent-glow);
  color: var(--text-color);
  border-color: var(--accent-color);
}

.offer-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
  background: var(--surface-color);
  border-radius: 8px;
  padding: 0.75rem 1rem;
  margin-bottom: 0.75rem;
}

.offer-actions {
  display: flex;
  gap: 0.5rem;
}

/* === Settings === */
.settings-panel {
  max-width: 48rem;
  margin: 0 auto;
  background: var(--surface-color);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.settings-section {
  margin-bottom: 2rem;
}

.settings-section h3 {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 1rem;
}

.radio-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
  cursor: pointer;
}

.theme-options {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.theme-option {
  padding: 1rem;
  border-radius: 8px;
  border: 2px solid transparent;
  cursor: pointer;
  text-align: center;
}

.theme-option.selected {
  border-color: var(--accent-color);
}

.theme-option.dark {
  background: #1a1a22;
  color: #f5f5f5;
}

.theme-option.light {
  background: #e5e7eb;
  color: #1f2937;
}

.theme-preview {
  height: 5rem;
  border-radius: 6px;
  margin-bottom: 0.5rem;
}

.theme-option.dark .theme-preview {
  background: #0f0f13;
}

.theme-option.light .theme-preview {
  background: #ffffff;
}

.swatches {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.swatch {
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  border: none;
  cursor: pointer;
}

.swatch.selected {
  box-shadow: 0 0 0 2px var(--background-color), 0 0 0 4px var(--text-color);
}

/* === Responsive === */
@media (max-width: 768px) {
  .nav-links {
    gap: 0.75rem;
  }

  .card-details {
    grid-template-columns: 1fr;
  }

  .profile-hero {
    flex-direction: column;
    text-align: center;
  }
}
"#;
