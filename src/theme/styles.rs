//! Global CSS styles for CodeArena.
//!
//! Hover lifts, the live-contest pulse and smooth anchor scrolling live
//! here; the Rust side only toggles classes and inline styles.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg-deep: #0f172a;
  --bg-card: rgba(255, 255, 255, 0.05);
  --bg-card-hover: rgba(255, 255, 255, 0.1);
  --border: rgba(255, 255, 255, 0.1);

  --primary: #6366f1;
  --primary-light: #818cf8;
  --accent: #22d3ee;

  --easy: #22c55e;
  --medium: #f59e0b;
  --hard: #ef4444;

  --text-primary: #f8fafc;
  --text-secondary: rgba(248, 250, 252, 0.7);
  --text-muted: rgba(248, 250, 252, 0.5);

  --font-sans: 'Inter', 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', monospace;

  --shadow-card: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  --shadow-lift: 0 20px 40px rgba(0, 0, 0, 0.2);

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
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: var(--bg-deep);
}

.app {
  min-height: 100vh;
  background-image:
    radial-gradient(circle at 20% 20%, rgba(99, 102, 241, 0.25), transparent 40%),
    radial-gradient(circle at 80% 60%, rgba(34, 211, 238, 0.15), transparent 40%);
  background-repeat: no-repeat;
  background-attachment: fixed;
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: rgba(15, 23, 42, 0.85);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.logo-title {
  font-size: 1.5rem;
  background: linear-gradient(90deg, var(--primary-light), var(--accent));
  -webkit-background-clip: text;
  color: transparent;
}

.logo-subtitle {
  min-height: 1.2em;
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--text-muted);
}

.nav-links {
  display: flex;
  gap: 0.5rem;
}

.nav-link {
  padding: 0.5rem 1rem;
  border-radius: 8px;
  color: var(--text-secondary);
  cursor: pointer;
  user-select: none;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover {
  background: var(--bg-card-hover);
  color: var(--text-primary);
}

.nav-link.active {
  background: var(--primary);
  color: var(--text-primary);
}

/* === Pages === */
.main-content {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem;
}

.page {
  display: none;
}

.page.active {
  display: block;
  animation: fadeIn 0.3s ease;
}

.page-header {
  margin-bottom: 1.5rem;
}

.page-title {
  font-size: 2rem;
}

.page-subtitle, .empty-state {
  color: var(--text-muted);
}

/* === Controls === */
.problem-controls {
  display: flex;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.search-input-wrapper {
  position: relative;
  flex: 1;
}

.search-icon {
  position: absolute;
  left: 0.75rem;
  top: 50%;
  transform: translateY(-50%);
  opacity: 0.6;
}

.search-input, .filter-select {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: 10px;
  background: var(--bg-card);
  color: var(--text-primary);
  font: inherit;
  outline: none;
  transition: border-color var(--transition-fast);
}

.search-input {
  padding-left: 2.5rem;
}

.filter-select {
  width: auto;
}

.search-input:focus, .filter-select:focus {
  border-color: var(--primary-light);
}

/* === Cards === */
.problems-grid, .contests-grid, .stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.problem-card, .contest-card, .stat-card {
  padding: 1.5rem;
  border: 1px solid var(--border);
  border-radius: 16px;
  background: var(--bg-card);
  box-shadow: var(--shadow-card);
  transform: translateY(-5px);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.problem-card:hover, .contest-card:hover {
  transform: translateY(-8px);
}

.stat-card:hover {
  transform: translateY(-8px);
  box-shadow: var(--shadow-lift);
}

.problem-header, .contest-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.problem-description {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.difficulty, .contest-status {
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  font-size: 0.75rem;
  font-weight: 600;
  white-space: nowrap;
}

.difficulty.easy { background: rgba(34, 197, 94, 0.15); color: var(--easy); }
.difficulty.medium { background: rgba(245, 158, 11, 0.15); color: var(--medium); }
.difficulty.hard { background: rgba(239, 68, 68, 0.15); color: var(--hard); }

.contest-status.live { background: rgba(239, 68, 68, 0.2); color: var(--hard); }
.contest-status.upcoming { background: rgba(99, 102, 241, 0.2); color: var(--primary-light); }
.contest-status.ended { background: var(--bg-card-hover); color: var(--text-muted); }

.problem-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin-bottom: 1rem;
}

.tag {
  padding: 0.15rem 0.5rem;
  border-radius: 6px;
  background: var(--bg-card-hover);
  font-size: 0.75rem;
  color: var(--text-secondary);
}

.problem-footer {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.acceptance {
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--text-muted);
}

.contest-meta {
  list-style: none;
  margin-bottom: 1rem;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.contest-card.live {
  animation: pulse 2s infinite;
}

.stat-number {
  font-family: var(--font-mono);
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--accent);
}

.stat-label {
  color: var(--text-muted);
}

/* === Rows === */
.leaderboard, .activity {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.activity {
  margin-top: 2rem;
}

.leaderboard-row, .activity-item {
  display: grid;
  padding: 0.75rem 1rem;
  border-radius: 10px;
  background: rgba(255, 255, 255, 0.05);
  transform: translateX(0);
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.leaderboard-row {
  grid-template-columns: 80px 1fr 120px 120px;
}

.activity-item {
  grid-template-columns: 1fr auto;
}

.leaderboard-row:hover, .activity-item:hover {
  background: rgba(255, 255, 255, 0.1);
  transform: translateX(5px);
}

.leaderboard-heading {
  color: var(--text-muted);
  font-size: 0.8rem;
  text-transform: uppercase;
}

.activity-time {
  color: var(--text-muted);
  font-size: 0.8rem;
}

/* === Buttons === */
.btn {
  position: relative;
  overflow: hidden;
  padding: 0.6rem 1.2rem;
  border: none;
  border-radius: 10px;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: opacity var(--transition-fast), transform var(--transition-fast);
}

.btn:disabled {
  opacity: 0.6;
  cursor: progress;
}

.btn-primary {
  background: linear-gradient(135deg, var(--primary), var(--primary-light));
  color: var(--text-primary);
}

.btn-secondary {
  background: var(--bg-card-hover);
  color: var(--text-primary);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
}

/* === Animations === */
@keyframes fadeIn {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: translateY(-5px); }
}

@keyframes ripple {
  to {
    transform: scale(4);
    opacity: 0;
  }
}

@keyframes pulse {
  0%, 100% {
    transform: scale(1);
  }
  50% {
    transform: scale(1.05);
  }
}
"#;
