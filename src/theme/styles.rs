//! Global CSS styles for the character gallery.
//!
//! Dark terminal palette; cards and the detail overlay share one surface color.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #111416;
  --void-border: #1f2326;

  /* MOSS GREEN (Success, Primary actions) */
  --moss: #5a7a5a;
  --moss-glow: #7cb87c;

  /* CYAN (Links, Input, Focus) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* GOLD (Titles, Rarity) */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SEMANTIC */
  --danger: #ff3366;
  --info: #5f8fff;
  --lilac: #c4a7d7;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-3xl: 3rem;

  /* Transitions (overlay duration must stay below close_fallback_ms) */
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
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

:focus-visible {
  outline: 2px solid var(--cyan);
  outline-offset: 2px;
}

/* === Layout === */
.gallery-app {
  min-height: 100vh;
  padding: 2rem;
  outline: none;
}

.gallery-app.scroll-locked {
  height: 100vh;
  overflow: hidden;
}

.gallery-header {
  margin-bottom: 1.5rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.1em;
}

.tagline {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Filter Bar === */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.filter-bar__status {
  margin-left: auto;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.search-input-wrapper {
  position: relative;
  display: flex;
  align-items: center;
  flex: 1 1 280px;
}

.search-icon {
  position: absolute;
  left: 0.75rem;
  font-size: var(--text-sm);
  opacity: 0.6;
}

.input-field {
  width: 100%;
  padding: 0.625rem 1rem;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--cyan);
  box-shadow: 0 0 10px var(--cyan-glow);
}

.search-input {
  padding-left: 2.25rem;
  padding-right: 2.25rem;
}

.search-clear,
.search-hint {
  position: absolute;
  right: 0.75rem;
  color: var(--text-muted);
}

.search-clear {
  background: transparent;
  border: none;
  cursor: pointer;
  font-size: var(--text-lg);
}

.search-hint {
  padding: 0 0.375rem;
  border: 1px solid var(--void-border);
  border-radius: 3px;
  font-size: var(--text-xs);
}

/* === Facet Dropdown === */
.facet-dropdown {
  position: relative;
}

.facet-dropdown__trigger {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.625rem 1rem;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 4px;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  cursor: pointer;
}

.facet-dropdown__trigger.active {
  border-color: var(--moss);
  color: var(--text-primary);
}

.facet-dropdown.open .facet-dropdown__chevron {
  transform: rotate(180deg);
}

.facet-dropdown__list {
  position: absolute;
  top: calc(100% + 4px);
  left: 0;
  min-width: 100%;
  list-style: none;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 4px;
  z-index: 50;
  max-height: 320px;
  overflow-y: auto;
}

.facet-option {
  display: block;
  width: 100%;
  text-align: left;
  background: transparent;
  border: none;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  padding: 0.5rem 1rem;
  font-size: var(--text-sm);
  cursor: pointer;
  white-space: nowrap;
}

.facet-option:hover,
.facet-option.selected {
  background: rgba(0, 212, 170, 0.1);
  color: var(--cyan);
}

/* === Buttons === */
.btn {
  padding: 0.625rem 1.5rem;
  background: transparent;
  border: 1px solid transparent;
  border-radius: 4px;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all 0.2s ease;
}

.btn:disabled {
  opacity: 0.4;
  cursor: default;
}

.btn-primary {
  border-color: var(--moss);
  color: var(--text-primary);
}

.btn-primary:hover:not(:disabled) {
  border-color: var(--moss-glow);
  box-shadow: 0 0 20px rgba(124, 184, 124, 0.3);
  transform: translateY(-1px);
}

.btn-ghost {
  color: var(--text-secondary);
}

.btn-ghost:hover:not(:disabled) {
  color: var(--text-primary);
  border-color: var(--void-border);
}

.btn-small {
  padding: 0.375rem 0.75rem;
  font-size: var(--text-xs);
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  font-size: var(--text-xl);
  line-height: 1;
  cursor: pointer;
}

.icon-btn:hover {
  color: var(--text-primary);
}

/* === Badges === */
.badges {
  display: flex;
  flex-wrap: wrap;
  gap: 0.375rem;
}

.badge {
  padding: 0.125rem 0.5rem;
  border: 1px solid var(--void-border);
  border-radius: 999px;
  font-size: var(--text-xs);
  color: var(--text-secondary);
}

.badge--rarity {
  color: var(--gold);
  border-color: var(--gold-glow);
}

.badge--element {
  color: var(--cyan);
}

.badge--path {
  color: var(--lilac);
}

/* === Grid === */
.character-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.25rem;
}

.character-card {
  display: flex;
  flex-direction: column;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 8px;
  overflow: hidden;
  cursor: pointer;
  transition: border-color var(--transition-fast), transform var(--transition-fast);
}

.character-card:hover,
.character-card:focus-visible {
  border-color: var(--moss);
  transform: translateY(-2px);
}

.character-card__image img {
  display: block;
  width: 100%;
  aspect-ratio: 3 / 4;
  object-fit: cover;
  background: var(--void-black);
}

.character-card__body {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 0.875rem;
  flex: 1;
}

.character-card__name {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 400;
  color: var(--gold);
}

.character-card__description {
  color: var(--text-secondary);
  font-size: var(--text-xs);
}

.character-card__actions {
  padding: 0 0.875rem 0.875rem;
}

.grid-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  padding: 4rem 1rem;
  color: var(--text-secondary);
  text-align: center;
}

.grid-state--error {
  color: var(--danger);
}

.empty-icon {
  font-size: var(--text-3xl);
  opacity: 0.6;
}

.empty-hint {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Loading === */
.loading-indicator {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
}

.loading-spinner {
  width: 32px;
  height: 32px;
  border: 3px solid rgba(0, 212, 170, 0.2);
  border-top-color: var(--cyan);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

.loading-indicator.small .loading-spinner {
  width: 14px;
  height: 14px;
  border-width: 2px;
}

.loading-label {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Detail Overlay === */
.overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  background: rgba(10, 10, 10, 0.85);
  z-index: 1000;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.overlay.active {
  opacity: 1;
}

.detail-dialog {
  position: relative;
  display: grid;
  grid-template-columns: minmax(200px, 2fr) 3fr;
  gap: 1.5rem;
  width: 100%;
  max-width: 960px;
  max-height: 90vh;
  overflow-y: auto;
  padding: 1.5rem;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 8px;
  transform: translateY(12px);
  transition: transform var(--transition-normal);
}

.overlay.active .detail-dialog {
  transform: none;
}

.detail-dialog:focus {
  outline: none;
}

.close-btn {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
}

.detail-splash {
  width: 100%;
  border-radius: 4px;
  object-fit: cover;
}

.detail-body {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.detail-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--gold);
}

.detail-description {
  color: var(--text-secondary);
}

.detail-section h3 {
  margin-bottom: 0.5rem;
  font-size: var(--text-sm);
  font-weight: 400;
  color: var(--cyan);
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

.detail-meta {
  display: grid;
  gap: 0.25rem;
  font-size: var(--text-sm);
}

.detail-meta__row {
  display: flex;
  gap: 0.75rem;
}

.detail-meta__row dt {
  min-width: 7rem;
  color: var(--text-muted);
}

.verified {
  color: var(--moss-glow);
}

.inclusion-list,
.archive-entries {
  list-style: none;
  display: grid;
  gap: 0.25rem;
  font-size: var(--text-sm);
}

.inclusion-description,
.archive-empty {
  color: var(--text-muted);
}

.archive-entries {
  max-height: 200px;
  overflow-y: auto;
  font-size: var(--text-xs);
}

.error-text {
  color: var(--danger);
  font-size: var(--text-sm);
}

/* === Toasts === */
.toast-container {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 2000;
}

.toast {
  display: flex;
  align-items: center;
  gap: 0.625rem;
  min-width: 240px;
  max-width: 420px;
  padding: 0.75rem 1rem;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-left-width: 3px;
  border-radius: 4px;
  font-size: var(--text-sm);
  animation: toast-in var(--transition-normal);
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.toast.leaving {
  opacity: 0;
  transform: translateX(16px);
}

.toast--info { border-left-color: var(--info); }
.toast--success { border-left-color: var(--moss-glow); }
.toast--error { border-left-color: var(--danger); }

@keyframes toast-in {
  from { opacity: 0; transform: translateY(8px); }
}

@media (max-width: 720px) {
  .gallery-app { padding: 1rem; }
  .detail-dialog { grid-template-columns: 1fr; }
}
"#;
